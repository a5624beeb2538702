mod enumeration;
mod streaming;
