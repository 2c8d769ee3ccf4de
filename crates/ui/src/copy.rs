//! Arabic interface copy. The whole interface renders right-to-left.

pub const APP_TITLE: &str = "مسابقة النور الرمضانية";
pub const TAGLINE: &str = "رحلة معرفية إيمانية في أعماق الثقافة الإسلامية بأسلوب عصري.";
pub const ENTER_LABEL: &str = "دخول المسابقة";

pub const REGISTRATION_TITLE: &str = "بياناتك يا بطل";
pub const NAME_LABEL: &str = "الاسم الكريم";
pub const NAME_PLACEHOLDER: &str = "اكتب اسمك هنا...";
pub const AGE_LABEL: &str = "العمر";
pub const AGE_PLACEHOLDER: &str = "أدخل عمرك";
pub const START_LABEL: &str = "دخول الاختبار";
pub const LOADING_LABEL: &str = "جاري التحميل...";
pub const FETCH_FAILED: &str = "عذراً، فشل الاتصال. حاول مرة أخرى.";

pub const OPTION_LETTERS: [&str; 4] = ["أ", "ب", "ج", "د"];

pub const PASS_ICON: &str = "🏆";
pub const FAIL_ICON: &str = "📚";
pub const PASS_TITLE: &str = "بارك الله فيك";
pub const FAIL_TITLE: &str = "حاول مرة أخرى";
pub const FINAL_SCORE_LABEL: &str = "نتيجتك النهائية";
pub const PASS_RESET_LABEL: &str = "إعادة المسابقة";
pub const FAIL_RESET_LABEL: &str = "محاولة ثانية";

#[must_use]
pub fn pass_message(name: &str) -> String {
    format!("ما شاء الله يا {name}، لقد أثبتت تميزك وفهمك العميق!")
}

#[must_use]
pub fn fail_message(name: &str) -> String {
    format!("يا {name}، القراءة مفتاح العلم. لا تيأس وكرر المحاولة لتزداد علماً.")
}
