mod account;
mod booking;
