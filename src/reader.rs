use crate::utf8::encode_chars;
use std::io::{self, Read};

const READ_BUFFER_START_SIZE: usize = 256;

pub fn buffer_reader<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(READ_BUFFER_START_SIZE);
    reader.read_to_end(&mut buffer)?;
    tracing::event!(tracing::Level::TRACE, operation = "buffer_reader", len = buffer.len() as u64);
    Ok(buffer)
}

pub fn buffer_chars<I>(chars: I) -> Vec<u8>
where
    I: IntoIterator<Item = char>,
{
    encode_chars(chars, READ_BUFFER_START_SIZE)
}
