use dayfit_catalog::{CsvFeedbackLog, load_catalogs, load_exercises, load_foods};
use dayfit_core::{
    CatalogQuery, EnergyLevel, Exclusions, FeedbackRecord, FeedbackSink, Goal, HungerLevel, Intensity,
    MainType, Mood, PlannerOptions, PreferenceLabel, UserContext, Verdict, generate_schedule,
    parse_free_hours,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("data")
        .join(file)
}

#[test]
fn test_sample_catalogs_load() {
    let foods = load_foods(data_path("foods.csv")).unwrap();
    let exercises = load_exercises(data_path("exercises.csv")).unwrap();
    assert!(foods.len() >= 20, "expected 20+ healthy foods, got {}", foods.len());
    assert!(exercises.len() >= 20);
    assert!(foods.entries().iter().all(|f| f.name != "French Fries"));
    assert!(exercises.entries().iter().any(|e| e.intensity == Some(Intensity::High)));
}

#[test]
fn test_mindfulness_query_hits_real_rows() {
    let exercises = load_exercises(data_path("exercises.csv")).unwrap();
    let q = CatalogQuery::new()
        .categories(&["yoga", "breath", "meditat"])
        .intensities(&[Intensity::Low]);
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let e = exercises.sample(&q, &Exclusions::new(), &mut rng).unwrap();
        assert_eq!(e.intensity, Some(Intensity::Low));
    }
}

/// Real-data regression: a busy day from the sample catalogs keeps every invariant.
#[test]
fn test_full_day_from_sample_catalogs() {
    let catalogs = load_catalogs(&data_path("foods.csv"), &data_path("exercises.csv")).unwrap();
    let free = parse_free_hours("1,7-9,12,13,16-20").unwrap();
    let prefs = [
        PreferenceLabel::PhysicalActivity,
        PreferenceLabel::Meal,
        PreferenceLabel::Relaxation,
        PreferenceLabel::SocialOutdoor,
        PreferenceLabel::FocusedWork,
        PreferenceLabel::Hydration,
    ];

    for seed in 0..25 {
        let ctx = UserContext::new(Goal::Lose, EnergyLevel::High, HungerLevel::VeryHungry, Mood::Motivated);
        let mut rng = StdRng::seed_from_u64(seed);
        let s = generate_schedule(&ctx, &free, &prefs, &catalogs, &PlannerOptions::default(), &mut rng);

        assert_eq!(s.hours().collect::<Vec<_>>(), free.iter().collect::<Vec<_>>());
        for t in [MainType::Meal, MainType::Exercise, MainType::Work, MainType::Outdoor] {
            assert!(s.count_type(t) <= 1, "seed {seed}: {t} repeated");
        }
        let night = s.get(dayfit_core::Hour::new(1).unwrap()).unwrap();
        assert!(night.iter().all(|b| b.main_type == MainType::Sleep));
    }
}

#[test]
fn test_missing_catalog_files_fall_back_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let catalogs = load_catalogs(&dir.path().join("foods.csv"), &dir.path().join("exercises.csv")).unwrap();
    assert!(catalogs.foods.is_empty() && catalogs.exercises.is_empty());

    let free = parse_free_hours("9,17").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let s = generate_schedule(
        &UserContext::default(),
        &free,
        &[PreferenceLabel::Meal, PreferenceLabel::PhysicalActivity],
        &catalogs,
        &PlannerOptions::default(),
        &mut rng,
    );
    assert_eq!(s.len(), 2);
}

#[test]
fn test_feedback_for_generated_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let catalogs = load_catalogs(&data_path("foods.csv"), &data_path("exercises.csv")).unwrap();
    let free = parse_free_hours("8,18").unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let s = generate_schedule(
        &UserContext::default(),
        &free,
        &[PreferenceLabel::Meal],
        &catalogs,
        &PlannerOptions::default(),
        &mut rng,
    );

    let mut log = CsvFeedbackLog::in_dir(dir.path());
    for (hour, blocks) in s.iter() {
        for b in blocks {
            let rec = FeedbackRecord {
                user_id: "u1".into(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
                hour,
                activity: b.activity.clone(),
                verdict: Verdict::Like,
            };
            log.record_feedback(&rec).unwrap();
        }
    }
    let back = log.read_all().unwrap();
    assert_eq!(back.len(), s.blocks().count());
    assert_eq!(back[0].hour, dayfit_core::Hour::new(8).unwrap());
}
