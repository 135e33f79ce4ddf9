use chrono::{Local, NaiveDateTime};
use gf_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
