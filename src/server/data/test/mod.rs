mod appointment;
mod owner;
mod pet;
mod report;
mod schedule;
mod user;
mod veterinarian;
