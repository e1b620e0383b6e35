use serde::Serialize;

/// All localized page-chrome strings for a language.
///
/// Content that belongs to the school (news, notices, facilities, ...) lives in
/// the content dataset. This table holds the fixed interface text that each
/// page renders around that content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStrings {
    // ==================== Page Titles ====================
    pub home_title: &'static str,
    pub about_title: &'static str,
    pub academic_title: &'static str,
    pub admission_title: &'static str,
    pub teachers_title: &'static str,
    pub contact_title: &'static str,
    pub login_title: &'static str,

    // ==================== Chrome ====================
    /// Label of the scrolling news ticker
    pub latest_news: &'static str,
    pub quick_links: &'static str,
    /// Footer suffix after the school name
    pub all_rights_reserved: &'static str,
    pub apply_now: &'static str,
    pub learn_more: &'static str,

    // ==================== Home / About ====================
    pub college_overview: &'static str,
    pub student_achievements: &'static str,
    pub campus_facilities: &'static str,
    pub distinguished_faculty: &'static str,
    pub principal: &'static str,

    // ==================== Academic ====================
    pub notice_board: &'static str,
    pub class_schedule: &'static str,
    pub book_appointment: &'static str,

    // ==================== Teacher Directory ====================
    pub faculty_subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub filter_placeholder: &'static str,
    /// Display label for the "all" subject sentinel
    pub all_subjects: &'static str,
    pub no_teachers_found: &'static str,
    pub no_teachers_hint: &'static str,
    pub total_faculty: &'static str,
    pub subjects_taught: &'static str,

    // ==================== Forms ====================
    pub admission_form: &'static str,
    pub send_message: &'static str,
    pub sign_in: &'static str,
    pub sign_up: &'static str,
    pub submission_received: &'static str,
    pub missing_required_fields: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_message: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    home_title: "Home",
    about_title: "About Us",
    academic_title: "Academic Information",
    admission_title: "Admission Information",
    teachers_title: "Our Faculty",
    contact_title: "Contact Us",
    login_title: "Student Portal",

    latest_news: "Latest News",
    quick_links: "Quick Links",
    all_rights_reserved: "All rights reserved.",
    apply_now: "Apply Now",
    learn_more: "Learn More",

    college_overview: "College Overview",
    student_achievements: "Student Achievements",
    campus_facilities: "Campus Facilities",
    distinguished_faculty: "Our Distinguished Faculty",
    principal: "Principal",

    notice_board: "Notice Board",
    class_schedule: "Class Schedule",
    book_appointment: "Book an Appointment",

    faculty_subtitle: "Meet our dedicated team of experienced educators",
    search_placeholder: "Search teachers...",
    filter_placeholder: "Filter by subject",
    all_subjects: "All Subjects",
    no_teachers_found: "No teachers found",
    no_teachers_hint: "Try adjusting your search criteria",
    total_faculty: "Total Faculty",
    subjects_taught: "Subjects Taught",

    admission_form: "Online Admission Form",
    send_message: "Send Message",
    sign_in: "Sign In",
    sign_up: "Sign Up",
    submission_received: "Thank you! Your submission has been received.",
    missing_required_fields: "Please fill in all required fields.",

    not_found_title: "Page Not Found",
    not_found_message: "The page you are looking for does not exist.",
};

// ==================== Bengali Strings ====================

/// Bengali language strings
pub const BENGALI_STRINGS: LanguageStrings = LanguageStrings {
    home_title: "হোম",
    about_title: "আমাদের সম্পর্কে",
    academic_title: "একাডেমিক তথ্য",
    admission_title: "ভর্তি তথ্য",
    teachers_title: "আমাদের শিক্ষকমণ্ডলী",
    contact_title: "যোগাযোগ করুন",
    login_title: "শিক্ষার্থী পোর্টাল",

    latest_news: "সর্বশেষ খবর",
    quick_links: "দ্রুত লিংক",
    all_rights_reserved: "সকল অধিকার সংরক্ষিত।",
    apply_now: "এখনই আবেদন করুন",
    learn_more: "আরও জানুন",

    college_overview: "কলেজ পরিচিতি",
    student_achievements: "শিক্ষার্থীদের অর্জন",
    campus_facilities: "ক্যাম্পাস সুবিধাসমূহ",
    distinguished_faculty: "আমাদের প্রতিষ্ঠিত শিক্ষকমণ্ডলী",
    principal: "অধ্যক্ষ",

    notice_board: "নোটিশ বোর্ড",
    class_schedule: "ক্লাস রুটিন",
    book_appointment: "সাক্ষাৎকারের জন্য আবেদন",

    faculty_subtitle: "আমাদের নিবেদিতপ্রাণ অভিজ্ঞ শিক্ষাবিদগণের সাথে পরিচিত হন",
    search_placeholder: "শিক্ষক খুঁজুন...",
    filter_placeholder: "বিষয় অনুযায়ী ফিল্টার",
    all_subjects: "সকল বিষয়",
    no_teachers_found: "কোন শিক্ষক পাওয়া যায়নি",
    no_teachers_hint: "আপনার অনুসন্ধানের মানদণ্ড পরিবর্তন করে দেখুন",
    total_faculty: "মোট শিক্ষক",
    subjects_taught: "পঠিত বিষয়",

    admission_form: "অনলাইন ভর্তি ফর্ম",
    send_message: "বার্তা পাঠান",
    sign_in: "সাইন ইন",
    sign_up: "নিবন্ধন",
    submission_received: "ধন্যবাদ! আপনার তথ্য গ্রহণ করা হয়েছে।",
    missing_required_fields: "অনুগ্রহ করে সকল প্রয়োজনীয় ঘর পূরণ করুন।",

    not_found_title: "পৃষ্ঠা পাওয়া যায়নি",
    not_found_message: "আপনি যে পৃষ্ঠাটি খুঁজছেন তা বিদ্যমান নেই।",
};
