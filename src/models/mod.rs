pub mod daily;
pub mod spell;
pub mod status;
pub mod survival;
pub mod worker;
