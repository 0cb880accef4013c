mod game;
mod review;
mod user;
