pub struct Config {
    /// Quiet level. Anything above zero hides the headers.
    pub quiet: u8,
    /// Hides the startup banner.
    pub no_banner: bool,
    /// Runs searches through a producer task and a bounded channel
    /// instead of collecting them in place.
    pub channelled: bool,
    /// Capacity of the hand-off channel. Only read when `channelled` is set.
    ///
    /// A capacity of one mirrors an unbuffered hand-off: the producer
    /// waits for the consumer after every combination.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            channelled: false,
            capacity: 1,
        }
    }
}
