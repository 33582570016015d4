use dnsclient_domain::DomainError;

pub(crate) fn read_u16(message: &[u8], pos: usize) -> Result<u16, DomainError> {
    match message.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(DomainError::malformed(format!(
            "expected 2 bytes at offset {}, message is {} bytes",
            pos,
            message.len()
        ))),
    }
}

pub(crate) fn read_u32(message: &[u8], pos: usize) -> Result<u32, DomainError> {
    match message.get(pos..pos + 4) {
        Some(bytes) => Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(DomainError::malformed(format!(
            "expected 4 bytes at offset {}, message is {} bytes",
            pos,
            message.len()
        ))),
    }
}
