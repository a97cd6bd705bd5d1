//! Fixed reference lists served alongside the reports.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    pub role: &'static str,
    pub phone: &'static str,
}

static EMERGENCY_CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        role: "Fire Department",
        phone: "+91-101",
    },
    EmergencyContact {
        role: "Ambulance",
        phone: "+91-102",
    },
    EmergencyContact {
        role: "Police",
        phone: "+91-100",
    },
    EmergencyContact {
        role: "Disaster Management Office",
        phone: "+91-1800-123-456",
    },
    EmergencyContact {
        role: "Local Hospital",
        phone: "+91-11-12345678",
    },
];

static RESOURCES: [&str; 8] = [
    "Nearest shelter locations",
    "First aid kits",
    "Drinking water (bottled)",
    "Non-perishable food supplies",
    "Portable radio and spare batteries",
    "Flashlights",
    "Blankets and warm clothing",
    "Emergency contact list printed",
];

static EVACUATION_INSTRUCTIONS: [&str; 6] = [
    "Follow official evacuation orders from local authorities.",
    "If indoors during an earthquake: Drop, Cover, and Hold On.",
    "If there is a flood risk: move to higher ground and avoid floodwater.",
    "If there is a fire: evacuate immediately and stay low to avoid smoke.",
    "Carry essential documents, medicines, and a flashlight.",
    "Keep family/friends informed about your location if possible.",
];

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    &EMERGENCY_CONTACTS
}

/// Supplies checklist, in display order.
pub fn resources() -> &'static [&'static str] {
    &RESOURCES
}

/// Evacuation steps, in the order they should be followed.
pub fn evacuation_instructions() -> &'static [&'static str] {
    &EVACUATION_INSTRUCTIONS
}
