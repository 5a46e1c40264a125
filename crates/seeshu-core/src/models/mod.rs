pub mod assessment;
pub mod baby;
pub mod doctor;
pub mod facility;
pub mod observation;
pub mod training;
pub mod user;
