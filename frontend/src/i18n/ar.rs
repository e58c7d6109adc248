pub mod navbar {
    pub const NAV_HOME: &str = "الرئيسية";
    pub const NAV_ADDONS: &str = "الإضافات";
    pub const NAV_TUTORIALS: &str = "الشروحات";
    pub const NAV_ABOUT: &str = "من نحن";
    pub const NAV_MAIN_ARIA: &str = "التنقل الرئيسي";
    pub const MOBILE_NAV_ARIA: &str = "قائمة الجوال";
    pub const OPEN_MENU_ARIA: &str = "فتح القائمة";
    pub const CLOSE_MENU_ARIA: &str = "إغلاق القائمة";
    pub const LOGO_ALT: &str = "StremioLabAR Logo";
}

pub mod home {
    pub const BADGE: &str = "الوجهة الأولى للمستخدم العربي";
    pub const TITLE_BEFORE: &str = "اكتشف عالم ";
    pub const TITLE_HIGHLIGHT: &str = "ستريميو";
    pub const TITLE_AFTER: &str = " بلا حدود";
    pub const INTRO: &str = "الموقع العربي الأول المتخصص في إضافات وشروحات تطبيق Stremio. \
                             كل ما تحتاجه لتجربة مشاهدة سينمائية متكاملة في مكان واحد.";
    pub const CTA_ADDONS: &str = "تصفح الإضافات";
    pub const CTA_TUTORIALS: &str = "الشروحات";
}

pub mod addons {
    pub const HEADING: &str = "الإضافة المميزة";
    pub const SUBHEADING: &str = "أفضل إضافة مختارة بعناية لتحسين تجربتك";
    pub const VERSION_TEMPLATE: &str = "الإصدار {}";
    pub const INSTALL: &str = "تثبيت الإضافة";
}

pub mod tutorials {
    pub const HEADING: &str = "الشرح المميز";
    pub const SUBHEADING: &str = "دليل تعليمي مبسط لمساعدتك في تحقيق أقصى استفادة";
    pub const WATCH: &str = "مشاهدة الشرح";
}

pub mod about {
    pub const SOCIALS_ARIA: &str = "حسابات التواصل";
}

pub mod footer {
    pub const COPYRIGHT_TEMPLATE: &str = "جميع الحقوق محفوظة © {} {}";
    pub const TAGLINE: &str = "صمم بكل ❤️ لمجتمع ستريميو العربي";
}

pub mod meta {
    pub const TITLE_TEMPLATE: &str = "{} | {}";
    pub const DESC_HOME: &str =
        "الموقع العربي الأول المتخصص في إضافات وشروحات تطبيق Stremio.";
    pub const DESC_ADDONS: &str = "إضافات Stremio مختارة بعناية مع روابط التثبيت.";
    pub const DESC_TUTORIALS: &str = "شروحات مبسطة لتثبيت إضافات Stremio واستخدامها.";
    pub const DESC_ABOUT: &str = "تعرف على فريق StremioLabAR وحساباته.";
}
