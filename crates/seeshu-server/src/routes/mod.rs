pub mod assessments;
pub mod auth;
pub mod babies;
pub mod chat;
pub mod consult;
pub mod doctors;
pub mod emergency;
pub mod health;
pub mod i18n;
pub mod training;
