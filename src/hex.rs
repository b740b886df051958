/// Renders bytes as uppercase hex pairs separated by single spaces, `"01 A0 FF"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
