#![forbid(unsafe_code)]

//! Built-in indicator messages.
//!
//! Entries are keyed by lowercase base language code and kept sorted so
//! lookups can binary search.

/// One built-in catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEntry {
    pub code: &'static str,
    pub indicator: &'static str,
    pub release: &'static str,
    pub refreshing: &'static str,
}

const fn entry(
    code: &'static str,
    indicator: &'static str,
    release: &'static str,
    refreshing: &'static str,
) -> BuiltinEntry {
    BuiltinEntry {
        code,
        indicator,
        release,
        refreshing,
    }
}

/// Code of the language every unknown tag falls back to.
pub const FALLBACK_CODE: &str = "en";

/// The built-in catalog, sorted by code.
pub const BUILTINS: &[BuiltinEntry] = &[
    entry("ar", "اسحب للأسفل للتحديث", "حرر للتحديث", "جارٍ التحديث..."),
    entry("cs", "Stáhněte dolů pro obnovení", "Uvolněte pro obnovení", "Obnovování..."),
    entry("da", "Træk ned for at opdatere", "Slip for at opdatere", "Opdaterer..."),
    entry(
        "de",
        "Zum Aktualisieren nach unten ziehen",
        "Zum Aktualisieren loslassen",
        "Wird aktualisiert...",
    ),
    entry("en", "Pull down to refresh", "Release to refresh", "Refreshing..."),
    entry(
        "es",
        "Desliza hacia abajo para actualizar",
        "Suelta para actualizar",
        "Actualizando...",
    ),
    entry(
        "fr",
        "Tirez vers le bas pour actualiser",
        "Relâchez pour actualiser",
        "Actualisation...",
    ),
    entry(
        "hi",
        "रीफ़्रेश करने के लिए नीचे खींचें",
        "रीफ़्रेश करने के लिए छोड़ें",
        "रीफ़्रेश हो रहा है...",
    ),
    entry(
        "it",
        "Trascina verso il basso per aggiornare",
        "Rilascia per aggiornare",
        "Aggiornamento...",
    ),
    entry("ja", "下に引いて更新", "離して更新", "更新中..."),
    entry("ko", "아래로 당겨서 새로고침", "놓아서 새로고침", "새로고침 중..."),
    entry("pl", "Pociągnij w dół, aby odświeżyć", "Puść, aby odświeżyć", "Odświeżanie..."),
    entry("pt", "Puxe para baixo para atualizar", "Solte para atualizar", "Atualizando..."),
    entry("ru", "Потяните вниз для обновления", "Отпустите для обновления", "Обновление..."),
    entry("sv", "Dra nedåt för att uppdatera", "Släpp för att uppdatera", "Uppdaterar..."),
    entry("tr", "Yenilemek için aşağı çekin", "Yenilemek için bırakın", "Yenileniyor..."),
    entry("uk", "Потягніть униз, щоб оновити", "Відпустіть, щоб оновити", "Оновлення..."),
    entry("zh", "下拉刷新", "释放刷新", "正在刷新..."),
];

/// Look up a built-in entry by normalized base code.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static BuiltinEntry> {
    BUILTINS
        .binary_search_by(|e| e.code.cmp(code))
        .ok()
        .map(|idx| &BUILTINS[idx])
}

/// The English entry. Always present.
#[must_use]
pub fn fallback() -> &'static BuiltinEntry {
    // FALLBACK_CODE is in BUILTINS; the final arm only guards against edits.
    lookup(FALLBACK_CODE).unwrap_or(&BUILTINS[4])
}
