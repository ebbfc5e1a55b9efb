use chrono::{Datelike, Local, Timelike, Utc};
use rand::{thread_rng, Rng};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Four random base-36 characters.
fn fragment() -> String {
    let mut rng = thread_rng();
    (0..4).map(|_| BASE36[rng.gen_range(0..36)] as char).collect()
}

/// Builds a practically-unique row identifier from wall-clock time with
/// random fragments interleaved: `rand4 YYYY MM DD rand4 hh mm ss rand4
/// mmm rand4`. No coordination with the store; two calls inside the same
/// millisecond can still collide on the date/time digits and rely on the
/// fragments alone, so a primary-key insert may (rarely) fail.
pub fn generate_unique_id() -> String {
    let now = Local::now();
    format!(
        "{}{:04}{:02}{:02}{}{:02}{:02}{:02}{}{:03}{}",
        fragment(),
        now.year(),
        now.month(),
        now.day(),
        fragment(),
        now.hour(),
        now.minute(),
        now.second(),
        fragment(),
        now.timestamp_subsec_millis() % 1000,
        fragment(),
    )
}

/// Login handle for a freshly created account: the current epoch
/// milliseconds in base-36. Unique as long as two accounts are not created
/// within the same millisecond; the column's unique index catches the rest.
pub fn generate_handle() -> String {
    to_base36(Utc::now().timestamp_millis() as u64)
}

pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base-36 alphabet is ASCII")
}
