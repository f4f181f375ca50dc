use chrono::Utc;
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: u32 = 8;

/// Generate a node id: `<prefix>-<base36 millis>-<random>`
///
/// The random part comes from a v4 UUID (OS randomness); the timestamp
/// keeps ids created later lexically distinguishable within a session.
pub fn generate_node_id(prefix: &str) -> String {
    let prefix = if prefix.is_empty() { "node" } else { prefix };
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let random = Uuid::new_v4().as_u128() % 36u128.pow(SUFFIX_LEN);

    format!(
        "{}-{}-{:0>width$}",
        prefix,
        to_base36(millis),
        to_base36(random),
        width = SUFFIX_LEN as usize
    )
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}
