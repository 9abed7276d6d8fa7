use anyhow::Result;
use chrono_tz::Tz;
use dayfit_core::Goal;
use std::io::{self, Write};

use crate::state::{Profile, default_timezone, profile_path, write_profile};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Re-prompt until the answer parses; a blank answer takes `default`.
fn prompt_parsed<T, F>(label: &str, default: T, parse: F) -> Result<T>
where
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = prompt(label)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match parse(&answer) {
            Some(v) => return Ok(v),
            None => println!("  '{}' not recognised, try again", answer),
        }
    }
}

pub fn run_setup() -> Result<()> {
    println!("dayfit setup\n");
    let mut user_id = prompt("User id (default: local)")?;
    if user_id.is_empty() {
        user_id = "local".to_string();
    }

    let goal = prompt_parsed("Goal: lose, gain or maintain (default: maintain)", Goal::Maintain, |s| {
        s.parse::<Goal>().ok()
    })?;

    let tz_label = format!("Timezone (default: {})", default_timezone());
    let timezone = prompt_parsed(&tz_label, default_timezone(), |s| {
        s.parse::<Tz>().ok().map(|tz| tz.name().to_string())
    })?;

    let profile = Profile {
        created_at_utc: Some(chrono::Utc::now().to_rfc3339()),
        user_id,
        goal,
        timezone,
    };
    let p = profile_path()?;
    write_profile(&p, &profile)?;

    println!("\nWrote:");
    println!("- {}", p.display());

    println!("\nNext recommended steps:");
    println!("- dayfit config init             (catalog paths, baseline fill)");
    println!("- dayfit plan --hours 7,12,16,20 --pref exercise --pref meal --energy moderate --hunger hungry --mood motivated");

    Ok(())
}
