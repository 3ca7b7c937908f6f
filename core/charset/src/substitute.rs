use samurai_types::CharClassKind;
use crate::class::CharacterClass;
use crate::table::SubstitutionTable;
use crate::tables::GETA_MARK;

/// 機種依存文字を安全な文字に置き換える
pub fn to_safe_string(text: &str) -> String {
    SubstitutionTable::safe_string().apply(text)
}

/// 互換性のない文字をすべて下駄記号 (〓) に置き換える
pub fn getalize(text: &str) -> String {
    let incompatible = CharacterClass::of(CharClassKind::Incompatible);
    text.chars()
        .map(|c| if incompatible.contains(c) { GETA_MARK } else { c })
        .collect()
}
