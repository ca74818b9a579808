use crate::models::PackingList;

pub static PACKING_LISTS: &[PackingList] = &[
    PackingList {
        key: "shantanu",
        label: "Shantanu",
        sub: "Driver + CPAP",
        items: &[
            "CPAP machine + power adapter + extension cord",
            "Driving license, RC, insurance printout",
            "FASTag: check balance (₹2,000+)",
            "Phone mount + car charger (USB-C)",
            "2 sets dhoti/kurta (temple)",
            "1 set clothes for sea bath",
            "1 spare casual set",
            "Towel",
            "Waterproof pouch (phone + keys)",
            "Wallet: ₹5,000 cash + cards",
            "Sunglasses",
            "Medications (if any)",
            "Slip-on footwear (temple)",
        ],
    },
    PackingList {
        key: "parents",
        label: "Parents",
        sub: "Comfort priority",
        items: &[
            "Comfortable walking shoes (long temple corridors)",
            "2 sets traditional clothes (temple)",
            "1 set clothes for sea bath",
            "1 spare comfortable set",
            "Towels",
            "All regular medications",
            "Reading glasses",
            "Light shawl / jacket (5 AM temple visit)",
            "Slip-on footwear (temple)",
            "Small pillow / neck rest",
            "Water bottle each",
        ],
    },
    PackingList {
        key: "shruti",
        label: "Shruti",
        sub: "",
        items: &[
            "2 sets churidar / saree (temple)",
            "1 set clothes for sea bath",
            "1 spare casual set",
            "Dupatta (temple requirement)",
            "Towel",
            "Sunscreen",
            "Slip-on footwear (temple)",
            "Medications (if any)",
        ],
    },
    PackingList {
        key: "car",
        label: "Car & Shared",
        sub: "MG Hector",
        items: &[
            "Water bottles × 8",
            "Snack box",
            "First aid kit",
            "Umbrella × 2",
            "Plastic bags × 6 (wet clothes)",
            "Car documents folder",
            "Tissue / wet wipes",
            "Garbage bags",
            "Phone charging cables × 2",
            "Torch (5 AM temple)",
        ],
    },
    PackingList {
        key: "petcare",
        label: "Pre-departure",
        sub: "Chiku & Oreo",
        items: &[
            "Confirm pet boarding / sitter",
            "Drop off pets before departure",
            "Share vet contact with sitter",
            "Print feeding schedule",
            "Pack pet food for 3 days",
        ],
    },
];
