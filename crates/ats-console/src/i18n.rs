//! Two-language label map for the console.
//!
//! Labels are looked up by key instead of scraped from markup attributes.
//! A missing translation returns `None` and the caller keeps whatever text
//! it rendered last, so a partial map degrades to stale text rather than
//! blank labels.

/// Display language selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Khmer.
    Km,
}

impl Language {
    /// Parses a language code from config or CLI input.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "km" => Some(Self::Km),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Km => "km",
        }
    }

    /// The other language, for the toggle key.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Km,
            Self::Km => Self::En,
        }
    }
}

/// Every localized label the console renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    ConnConnecting,
    ConnConnected,
    ConnOnline,
    ConnLost,
    ConnError,
    AlarmFault,
    AlarmNone,
    GenSendingStart,
    GenSendingStop,
    GenStatusRunning,
    GenStatusStopped,
    GenStatusPrefix,
    GenNowRunning,
    GenNowStopped,
    GenUnexpectedPrefix,
    BtnStart,
    BtnStop,
    LoginInvalid,
    UsernamePlaceholder,
    PasswordPlaceholder,
    LastUpdatePrefix,
    CardPower,
    CardSource,
    CardBackup,
    CardAlarm,
    CardGenerator,
}

/// Looks up the display text for a label in the given language.
///
/// Returns `None` when the key has no text for that language; callers must
/// leave their previously rendered text in place in that case.
#[must_use]
pub fn label_text(key: LabelKey, lang: Language) -> Option<&'static str> {
    use LabelKey::*;
    let (en, km) = match key {
        ConnConnecting => ("Connecting...", "កំពុងតភ្ជាប់..."),
        ConnConnected => ("✅ Connected to MQTT", "✅ បានភ្ជាប់ទៅ MQTT"),
        ConnOnline => ("🟢 Online", "🟢 លើបណ្តាញ"),
        ConnLost => ("❌ Connection Lost", "❌ ការតភ្ជាប់បាត់បង់"),
        ConnError => ("⚠️ Connection Error", "⚠️ កំហុសការតភ្ជាប់"),
        AlarmFault => ("🚨 ACTIVE FAULT", "🚨 កំហុសសកម្ម"),
        AlarmNone => ("None", "គ្មាន"),
        GenSendingStart => (
            "🚀 Sending START command...",
            "🚀 កំពុងផ្ញើពាក្យបញ្ជាចាប់ផ្តើម...",
        ),
        GenSendingStop => (
            "🛑 Sending STOP command...",
            "🛑 កំពុងផ្ញើពាក្យបញ្ជាបញ្ឈប់...",
        ),
        GenStatusRunning => ("Status: Running", "ស្ថានភាព: កំពុងដំណើរការ"),
        GenStatusStopped => ("Status: Stopped", "ស្ថានភាព: មិនដំណើរការ"),
        GenStatusPrefix => ("Status: ", "ស្ថានភាព: "),
        GenNowRunning => (
            "✅ Generator is now RUNNING!",
            "✅ ម៉ាស៊ីនភ្លើងកំពុងដំណើរការ!",
        ),
        GenNowStopped => (
            "🛑 Generator is now STOPPED.",
            "🛑 ម៉ាស៊ីនភ្លើងបានបញ្ឈប់។",
        ),
        GenUnexpectedPrefix => (
            "⚠️ Unexpected Generator Status: ",
            "⚠️ ស្ថានភាពម៉ាស៊ីនភ្លើងមិនរំពឹងទុក: ",
        ),
        BtnStart => ("Start Generator", "ចាប់ផ្តើមម៉ាស៊ីនភ្លើង"),
        BtnStop => ("Stop Generator", "បញ្ឈប់ម៉ាស៊ីនភ្លើង"),
        LoginInvalid => (
            "❌ Invalid Username or Password",
            "❌ ឈ្មោះអ្នកប្រើប្រាស់ ឬលេខសម្ងាត់មិនត្រឹមត្រូវ",
        ),
        UsernamePlaceholder => ("Username", "ឈ្មោះអ្នកប្រើប្រាស់"),
        PasswordPlaceholder => ("Password", "លេខសម្ងាត់"),
        LastUpdatePrefix => ("Last update", "ពេលវេលាធ្វើបច្ចុប្បន្នភាពចុងក្រោយ"),
        CardPower => ("Power", "ថាមពល"),
        CardSource => ("Source", "ប្រភពថាមពល"),
        CardBackup => ("Backup", "ថាមពលបម្រុង"),
        CardAlarm => ("Alarm", "សំឡេងរោទ៍"),
        CardGenerator => ("Generator", "ម៉ាស៊ីនភ្លើង"),
    };
    match lang {
        Language::En => Some(en),
        Language::Km => Some(km),
    }
}
