mod common;
mod gate;
mod handover;
mod identity;
mod risk;
