use anyhow::Result;
use dayfit_core::Schedule;

pub const NO_PLAN: &str = "No plan generated: pick at least one free hour.";

pub fn render_text(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return format!("{NO_PLAN}\n");
    }
    let mut out = String::new();
    out.push_str(&format!("# Plan for today ({} free hours)\n\n", schedule.len()));
    for (hour, blocks) in schedule.iter() {
        out.push_str(&format!("{hour}\n"));
        for b in blocks {
            out.push_str(&format!("  - {} [{}] ({})\n", b.activity, b.duration, b.main_type));
            out.push_str(&format!("    {}\n", b.rationale));
        }
    }
    out
}

pub fn render_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
