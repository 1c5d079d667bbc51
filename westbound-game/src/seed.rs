//! Reversible journey-code scheme with a trail-themed word list.
//! Code format: <PROFESSION>-<WORD><NN>, e.g., FM-WAGON07, BK-SUMMIT42

use crate::profession::Profession;

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// Word list for journey codes
pub const WORD_LIST: [&str; 32] = [
    "WAGON", "OXEN", "RIVER", "PRAIRIE", "SUMMIT", "FORD", "MEADOW", "CANYON", "BISON", "SAGE",
    "GRANITE", "WILLOW", "CHIMNEY", "LARAMIE", "PLATTE", "BOISE", "DALLES", "CASCADE", "RAVINE",
    "THICKET", "JUNIPER", "BLUFF", "CREEK", "SNOWCAP", "SUNSET", "HARVEST", "LANTERN", "COMPASS",
    "KETTLE", "AXLE", "HOMESTEAD", "CROSSING",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x001F | ((u16::from(nn) & 0x7F) << 5)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x001F, ((packed >> 5) & 0x7F) as u8)
}

fn compose_seed(profession: Profession, word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    // Domain-separated FNV input
    let code = profession.code().as_bytes();
    let mut buf = [0u8; 11];
    buf[..6].copy_from_slice(b"WESTB-");
    buf[6] = code[0];
    buf[7] = code[1];
    buf[8] = (packed & 0xFF) as u8;
    buf[9] = (packed >> 8) as u8;
    buf[10] = 0x5A;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_F000) | u64::from(packed)
}

#[must_use]
pub fn encode_friendly(profession: Profession, seed: u64) -> String {
    let packed = (seed & 0x0FFF) as u16;
    let (wi, mut nn) = unpack(packed);
    let word = WORD_LIST.get(wi as usize).copied().unwrap_or("WAGON");
    if nn > 99 {
        nn %= 100;
    }
    format!("{}-{word}{nn:02}", profession.code())
}

#[must_use]
pub fn decode_to_seed(code: &str) -> Option<(Profession, u64)> {
    let s = code.trim();
    let (tag, rest) = s.split_once('-')?;
    let profession = Profession::from_code(tag)?;
    if rest.len() < 3 {
        return None;
    }
    let (word_part, nn_part) = rest.split_at(rest.len() - 2);
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| sanitize_word(w) == word)?;
    let wi = u16::try_from(idx).ok()?;
    let seed = compose_seed(profession, wi, nn);
    Some((profession, seed))
}

#[must_use]
pub fn generate_code_from_entropy(profession: Profession, entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = ((entropy >> 13) % 100) as u8;
    let seed = compose_seed(profession, wi, nn);
    encode_friendly(profession, seed)
}
