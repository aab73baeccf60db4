pub mod observation;
pub mod period;
pub mod weather_code;
pub mod weekly;
