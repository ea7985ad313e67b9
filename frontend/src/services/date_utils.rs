use js_sys::Date;

/// Current local date in the `yyyy-mm-dd` shape a date input expects.
pub fn get_current_date() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Current local time in the `HH:mm` shape a time input expects.
pub fn get_current_time() -> String {
    let now = Date::new_0();

    format!(
        "{:02}:{:02}",
        now.get_hours() as u32,
        now.get_minutes() as u32
    )
}
