mod common;
mod progression;
mod quests;
mod service;
