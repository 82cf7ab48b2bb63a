pub mod badge;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod icon;
pub mod record_panels;
pub mod site_chrome;
pub mod spinner;
pub mod stat_card;
