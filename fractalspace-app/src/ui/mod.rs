pub(crate) mod export;
pub(crate) mod help;
pub(crate) mod hud;
pub(crate) mod iterations;
