use crate::models::{BilingualText, StepDefinition};

const fn t(en: &'static str, hi: &'static str) -> BilingualText {
    BilingualText::new(en, hi)
}

pub static DAY_TITLES: &[BilingualText] = &[
    t("Arrival Day", "पहुँचने का दिन"),
    t("Core Darshan Day", "मुख्य दर्शन दिवस"),
    t("Buffer & Return", "अतिरिक्त समय व वापसी"),
];

/// The itinerary, ordered by day and then by time.
pub static STEPS: &[StepDefinition] = &[
    StepDefinition {
        slug: "check-in",
        day_number: 0,
        sort_order: 1,
        time_window: "6:00 – 6:30 PM",
        duration_min: 30,
        title: t("Hotel Check-in", "होटल चेक-इन"),
        subtitle: t("Daiwik Hotels, Sethupathi St", "दैविक होटल, सेतुपति स्ट्रीट"),
        tip: t(
            "Ask for a temple-facing room on a higher floor and confirm a 4:30 AM wake-up call.",
            "ऊपरी मंज़िल पर मंदिर की ओर वाला कमरा माँगें और सुबह 4:30 का वेक-अप कॉल पक्का करें।",
        ),
        carry: &[t("ID cards for all four", "चारों के पहचान पत्र")],
        skip_allowed: false,
        skip_consequence: None,
        next_slug: Some("evening-recon"),
        phase: None,
    },
    StepDefinition {
        slug: "evening-recon",
        day_number: 0,
        sort_order: 2,
        time_window: "7:00 – 8:30 PM",
        duration_min: 90,
        title: t("Evening Temple Recon", "शाम को मंदिर का जायज़ा"),
        subtitle: t("Walk the east gate and the queues", "पूर्वी द्वार और कतारें देख आएँ"),
        tip: t(
            "Find the Spatika Lingam ticket counter tonight so the 5 AM visit is calm.",
            "स्फटिक लिंगम का टिकट काउंटर आज रात ही देख लें ताकि सुबह 5 बजे की यात्रा आराम से हो।",
        ),
        carry: &[
            t("Slip-on footwear", "आसानी से उतरने वाले जूते-चप्पल"),
            t("Small cash for dinner", "रात के खाने के लिए नक़द"),
        ],
        skip_allowed: true,
        skip_consequence: Some(t(
            "Tomorrow's early queue will be unfamiliar.",
            "कल सुबह की कतार अनजानी रहेगी।",
        )),
        next_slug: Some("spatika-lingam"),
        phase: None,
    },
    StepDefinition {
        slug: "spatika-lingam",
        day_number: 1,
        sort_order: 1,
        time_window: "5:00 – 6:00 AM",
        duration_min: 60,
        title: t("Spatika Lingam Darshan", "स्फटिक लिंगम दर्शन"),
        subtitle: t("Only between 5 and 6 AM", "केवल सुबह 5 से 6 बजे तक"),
        tip: t(
            "Be in line by 4:45 AM. Tickets are ₹50 per person, cash only.",
            "4:45 तक कतार में लग जाएँ। टिकट ₹50 प्रति व्यक्ति, केवल नक़द।",
        ),
        carry: &[
            t("₹200 cash for tickets", "टिकट के लिए ₹200 नक़द"),
            t("Light shawl", "हल्की शॉल"),
        ],
        skip_allowed: true,
        skip_consequence: Some(t(
            "This darshan happens only once a day.",
            "यह दर्शन दिन में केवल एक बार होता है।",
        )),
        next_slug: Some("agni-theertham"),
        phase: Some("Temple circuit"),
    },
    StepDefinition {
        slug: "agni-theertham",
        day_number: 1,
        sort_order: 2,
        time_window: "6:15 – 6:45 AM",
        duration_min: 30,
        title: t("Agni Theertham Sea Bath", "अग्नि तीर्थम समुद्र स्नान"),
        subtitle: t("Holy dip facing the sunrise", "सूर्योदय की ओर पवित्र डुबकी"),
        tip: t(
            "Wear the sea-bath set; you stay wet for the next hour.",
            "समुद्र स्नान वाले कपड़े पहनें, अगले एक घंटे तक गीले रहेंगे।",
        ),
        carry: &[
            t("Sea-bath clothes", "स्नान के कपड़े"),
            t("Waterproof pouch", "वाटरप्रूफ़ थैली"),
        ],
        skip_allowed: true,
        skip_consequence: Some(t(
            "The theertham baths traditionally begin here.",
            "परंपरा के अनुसार तीर्थ स्नान यहीं से शुरू होता है।",
        )),
        next_slug: Some("22-theerthams"),
        phase: Some("Temple circuit"),
    },
    StepDefinition {
        slug: "22-theerthams",
        day_number: 1,
        sort_order: 3,
        time_window: "7:00 – 8:30 AM",
        duration_min: 90,
        title: t("22 Theerthams", "22 तीर्थ"),
        subtitle: t("Wells inside the temple corridors", "मंदिर गलियारों के कुएँ"),
        tip: t(
            "Hire one attendant for the family; ₹25 each, they pour from every well in order.",
            "परिवार के लिए एक सहायक रखें; ₹25 प्रति व्यक्ति, वे हर कुएँ से क्रम में जल डालते हैं।",
        ),
        carry: &[t("₹100 cash", "₹100 नक़द")],
        skip_allowed: true,
        skip_consequence: Some(t(
            "Main darshan is usually taken after the wells.",
            "मुख्य दर्शन आमतौर पर कुओं के बाद होता है।",
        )),
        next_slug: Some("main-darshan"),
        phase: Some("Temple circuit"),
    },
    StepDefinition {
        slug: "main-darshan",
        day_number: 1,
        sort_order: 4,
        time_window: "8:45 – 10:15 AM",
        duration_min: 90,
        title: t("Ramanathaswamy Main Darshan", "रामनाथस्वामी मुख्य दर्शन"),
        subtitle: t("Change into dry traditional clothes", "सूखे पारंपरिक कपड़े पहनें"),
        tip: t(
            "Take the ₹200 VIP line if the general queue is longer than 30 minutes.",
            "सामान्य कतार 30 मिनट से लंबी हो तो ₹200 वाली वीआईपी कतार लें।",
        ),
        carry: &[
            t("Dry dhoti / saree", "सूखी धोती / साड़ी"),
            t("₹800 for VIP tickets", "वीआईपी टिकट के लिए ₹800"),
        ],
        skip_allowed: false,
        skip_consequence: None,
        next_slug: Some("rest-hotel"),
        phase: Some("Temple circuit"),
    },
    StepDefinition {
        slug: "rest-hotel",
        day_number: 1,
        sort_order: 5,
        time_window: "10:30 AM – 1:30 PM",
        duration_min: 180,
        title: t("Rest & Lunch", "आराम और भोजन"),
        subtitle: t("Back at the hotel", "होटल में वापसी"),
        tip: t(
            "The temple closes from 1 to 3 PM; sleep while it is shut.",
            "मंदिर 1 से 3 बजे तक बंद रहता है; तब आराम कर लें।",
        ),
        carry: &[],
        skip_allowed: true,
        skip_consequence: Some(t(
            "The afternoon drive will be tiring for the parents.",
            "दोपहर की यात्रा माता-पिता के लिए थकाऊ होगी।",
        )),
        next_slug: Some("dhanushkodi"),
        phase: None,
    },
    StepDefinition {
        slug: "dhanushkodi",
        day_number: 1,
        sort_order: 6,
        time_window: "2:00 – 5:00 PM",
        duration_min: 180,
        title: t("Dhanushkodi", "धनुषकोडी"),
        subtitle: t("Ghost town and Arichal Munai", "भूतहा शहर और अरिचल मुनाई"),
        tip: t(
            "Take the shared jeep for the last 8 km; leave the beach before 5 PM.",
            "आख़िरी 8 किमी साझा जीप से जाएँ; शाम 5 से पहले समुद्र तट छोड़ दें।",
        ),
        carry: &[
            t("Water bottles", "पानी की बोतलें"),
            t("Sunscreen and umbrella", "सनस्क्रीन और छाता"),
        ],
        skip_allowed: true,
        skip_consequence: Some(t(
            "You miss the land's end where the two seas meet.",
            "जहाँ दो समुद्र मिलते हैं वह छोर छूट जाएगा।",
        )),
        next_slug: Some("gandhamadana"),
        phase: Some("Island loop"),
    },
    StepDefinition {
        slug: "gandhamadana",
        day_number: 1,
        sort_order: 7,
        time_window: "5:15 – 6:00 PM",
        duration_min: 45,
        title: t("Gandhamadana Parvatham", "गंधमादन पर्वतम"),
        subtitle: t("Rama's footprints at sunset", "सूर्यास्त पर राम के चरण चिह्न"),
        tip: t(
            "Highest point on the island; the sunset view is the reason to go.",
            "द्वीप का सबसे ऊँचा स्थान; सूर्यास्त का नज़ारा ही असली कारण है।",
        ),
        carry: &[],
        skip_allowed: true,
        skip_consequence: Some(t("You miss the island's best sunset.", "द्वीप का सबसे सुंदर सूर्यास्त छूट जाएगा।")),
        next_slug: Some("panchamukhi-hanuman"),
        phase: Some("Island loop"),
    },
    StepDefinition {
        slug: "panchamukhi-hanuman",
        day_number: 1,
        sort_order: 8,
        time_window: "6:15 – 7:00 PM",
        duration_min: 45,
        title: t("Panchamukhi Hanuman Temple", "पंचमुखी हनुमान मंदिर"),
        subtitle: t("Floating stones of the Setu", "सेतु के तैरते पत्थर"),
        tip: t(
            "Short visit on the way back to the hotel.",
            "होटल लौटते समय छोटी सी यात्रा।",
        ),
        carry: &[],
        skip_allowed: true,
        skip_consequence: None,
        next_slug: Some("buffer-morning"),
        phase: Some("Island loop"),
    },
    StepDefinition {
        slug: "buffer-morning",
        day_number: 2,
        sort_order: 1,
        time_window: "6:00 AM onwards",
        duration_min: 150,
        title: t("Buffer Morning", "खाली सुबह"),
        subtitle: t("Repeat darshan or rest", "दोबारा दर्शन या आराम"),
        tip: t(
            "Use this slot for anything missed yesterday.",
            "कल जो छूट गया उसके लिए यह समय रखें।",
        ),
        carry: &[],
        skip_allowed: true,
        skip_consequence: None,
        next_slug: Some("abdul-kalam"),
        phase: None,
    },
    StepDefinition {
        slug: "abdul-kalam",
        day_number: 2,
        sort_order: 2,
        time_window: "9:00 – 10:00 AM",
        duration_min: 60,
        title: t("Dr. APJ Abdul Kalam Memorial", "डॉ. एपीजे अब्दुल कलाम स्मारक"),
        subtitle: t("Pei Karumbu", "पेई करुम्बु"),
        tip: t(
            "Phones are deposited at the entrance; keep ₹60 for tickets.",
            "फ़ोन प्रवेश पर जमा होते हैं; टिकट के लिए ₹60 रखें।",
        ),
        carry: &[t("₹60 cash", "₹60 नक़द")],
        skip_allowed: true,
        skip_consequence: None,
        next_slug: Some("checkout-drive"),
        phase: None,
    },
    StepDefinition {
        slug: "checkout-drive",
        day_number: 2,
        sort_order: 3,
        time_window: "11:00 AM onwards",
        duration_min: 600,
        title: t("Checkout & Drive Home", "चेक-आउट और घर वापसी"),
        subtitle: t("Rameshwaram to Bengaluru", "रामेश्वरम से बेंगलुरु"),
        tip: t(
            "Checkout is at 12 PM. Refuel in Madurai before the highway.",
            "चेक-आउट दोपहर 12 बजे है। हाईवे से पहले मदुरै में ईंधन भरवाएँ।",
        ),
        carry: &[
            t("Packed lunch", "पैक किया हुआ खाना"),
            t("CPAP machine", "सीपैप मशीन"),
        ],
        skip_allowed: false,
        skip_consequence: None,
        next_slug: None,
        phase: None,
    },
];
