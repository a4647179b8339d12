#![no_main]
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use zlog::fmt::{CallSite, Pattern, RenderContext};
use zlog::level::Level;

fuzz_target!(|data: &str| {
    // Must not panic on any pattern string
    let Ok(pattern) = Pattern::parse(data) else {
        return;
    };

    let Some(timestamp) = NaiveDate::from_ymd_opt(2025, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return;
    };
    let ctx = RenderContext {
        timestamp,
        site: CallSite::new("fuzz.rs", 1, "fuzz"),
        logger_name: "fuzz",
        level: Level::Warning,
    };
    let _ = pattern.render(&ctx, false);
    let _ = pattern.render(&ctx, true);
});
