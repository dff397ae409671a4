mod crout;
mod driver;
