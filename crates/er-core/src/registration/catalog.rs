//! Fixed exam and exam-center catalogs.
//!
//! 固定的考试与考点目录。

use serde::Serialize;

/// An exam offering with its registration fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamOffering {
    pub id: &'static str,
    pub label: &'static str,
    pub fee: u64,
}

/// An exam center with the city it is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamCenter {
    pub id: &'static str,
    pub label: &'static str,
    pub city: &'static str,
}

pub const EXAM_OFFERINGS: [ExamOffering; 5] = [
    ExamOffering {
        id: "jee-main",
        label: "JEE Main 2024",
        fee: 850,
    },
    ExamOffering {
        id: "neet",
        label: "NEET 2024",
        fee: 1600,
    },
    ExamOffering {
        id: "gate",
        label: "GATE 2024",
        fee: 1800,
    },
    ExamOffering {
        id: "cat",
        label: "CAT 2024",
        fee: 2300,
    },
    ExamOffering {
        id: "upsc-prelims",
        label: "UPSC Prelims 2024",
        fee: 200,
    },
];

pub const EXAM_CENTERS: [ExamCenter; 10] = [
    ExamCenter {
        id: "delhi-01",
        label: "Delhi - Connaught Place Center",
        city: "Delhi",
    },
    ExamCenter {
        id: "delhi-02",
        label: "Delhi - Karol Bagh Center",
        city: "Delhi",
    },
    ExamCenter {
        id: "mumbai-01",
        label: "Mumbai - Andheri Center",
        city: "Mumbai",
    },
    ExamCenter {
        id: "mumbai-02",
        label: "Mumbai - Bandra Center",
        city: "Mumbai",
    },
    ExamCenter {
        id: "bangalore-01",
        label: "Bangalore - Koramangala Center",
        city: "Bangalore",
    },
    ExamCenter {
        id: "bangalore-02",
        label: "Bangalore - Whitefield Center",
        city: "Bangalore",
    },
    ExamCenter {
        id: "chennai-01",
        label: "Chennai - T. Nagar Center",
        city: "Chennai",
    },
    ExamCenter {
        id: "kolkata-01",
        label: "Kolkata - Salt Lake Center",
        city: "Kolkata",
    },
    ExamCenter {
        id: "pune-01",
        label: "Pune - FC Road Center",
        city: "Pune",
    },
    ExamCenter {
        id: "hyderabad-01",
        label: "Hyderabad - HITEC City Center",
        city: "Hyderabad",
    },
];

/// Look up an exam offering by its catalog id.
pub fn find_exam(id: &str) -> Option<&'static ExamOffering> {
    EXAM_OFFERINGS.iter().find(|exam| exam.id == id)
}

/// Look up an exam center by its catalog id.
pub fn find_center(id: &str) -> Option<&'static ExamCenter> {
    EXAM_CENTERS.iter().find(|center| center.id == id)
}
