#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProduceSummary {
    pub bytes_sent: u64,
    pub chunks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsumeSummary {
    pub bytes_received: u64,
    pub chunks: u64,
    pub total_words: u64,
}

impl ConsumeSummary {
    /// The data channel closed before a single byte arrived.
    ///
    /// Either the file was empty or the producer gave up before sending.
    pub fn is_empty_stream(&self) -> bool {
        self.bytes_received == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerOutcome {
    /// The total reached the producer.
    Delivered(u64),
    /// Nothing was received and the result channel had no reader left.
    ProducerGone,
}
