//! Page components. Every route renders [`LandingPage`].

mod home;

pub use home::LandingPage;
