use hcat2avro_avro::GenericRecord;

/// Error type returned by an [`OutputChannel`].
pub type ChannelError = Box<dyn std::error::Error + Send + Sync>;

/// Destination for transcoded `(key, record)` pairs, typically a message
/// bus producer.
pub trait OutputChannel {
    fn send(&mut self, key: Option<Vec<u8>>, record: GenericRecord) -> Result<(), ChannelError>;
}

impl<F> OutputChannel for F
where
    F: FnMut(Option<Vec<u8>>, GenericRecord) -> Result<(), ChannelError>,
{
    fn send(&mut self, key: Option<Vec<u8>>, record: GenericRecord) -> Result<(), ChannelError> {
        self(key, record)
    }
}
