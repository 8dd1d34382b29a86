//! External weather provider clients.

mod openweather;

pub use openweather::OpenWeatherClient;
