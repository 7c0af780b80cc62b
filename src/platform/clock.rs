/// Local hour of day, 0-23.
pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

