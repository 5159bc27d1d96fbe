//! Default seed list for a fresh (or corrupt) local store.

use crate::models::activity::Proof;
use crate::models::{ActivityRecord, Reflection, Status};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

pub fn default_records() -> Vec<ActivityRecord> {
    vec![
        ActivityRecord {
            id: ActivityRecord::new_id(),
            theme: "Security".into(),
            title: "Cybersecurity challenge hackathon".into(),
            kind: "Hackathon".into(),
            hours: 10,
            date: date(2024, 3, 15),
            status: Status::Completed,
            proof: Proof::Plain("Participation certificate".into()),
            description: "Ten-hour cybersecurity hackathon: cryptography, web vulnerability \
                          analysis and reverse engineering challenges."
                .into(),
            reflection: Reflection::Text(
                "Our team solved 8 of the 12 challenges. Working against the clock sharpened \
                 my log analysis skills and my routine with Wireshark and Burp Suite, and the \
                 experience lines up with my interest in secure IT infrastructure."
                    .into(),
            ),
            skills: vec![
                "Cybersecurity".into(),
                "Vulnerability analysis".into(),
                "Teamwork".into(),
                "Stress management".into(),
            ],
        },
        ActivityRecord {
            id: ActivityRecord::new_id(),
            theme: "Hardware".into(),
            title: "Smartphone repairs for private clients".into(),
            kind: "Other".into(),
            hours: 8,
            date: date(2024, 2, 10),
            status: Status::Completed,
            proof: Proof::Plain("Repair photos and client invoices".into()),
            description: "Screen, battery and charging-port replacements on five different \
                          smartphones."
                .into(),
            reflection: Reflection::Text(
                "Each repair needed its own diagnosis, the right spare parts and specialised \
                 tooling. Documenting every intervention kept the quality traceable and the \
                 clients informed."
                    .into(),
            ),
            skills: vec![
                "Hardware".into(),
                "Diagnostics".into(),
                "Client relations".into(),
                "Technical precision".into(),
            ],
        },
        ActivityRecord {
            id: ActivityRecord::new_id(),
            theme: "Hardware".into(),
            title: "Custom gaming PC build".into(),
            kind: "Other".into(),
            hours: 5,
            date: date(2024, 1, 20),
            status: Status::Completed,
            proof: Proof::Plain("Build photos and benchmark results".into()),
            description: "Complete assembly of a high-end gaming PC for a client, from part \
                          selection to benchmarks."
                .into(),
            reflection: Reflection::Text(
                "Component selection against a fixed budget, assembly, cable management, OS \
                 and driver installation, then overclocking and stability tests."
                    .into(),
            ),
            skills: vec![
                "PC assembly".into(),
                "Performance tuning".into(),
                "Windows".into(),
                "Technical advice".into(),
            ],
        },
        ActivityRecord {
            id: ActivityRecord::new_id(),
            theme: "Electronics/IoT".into(),
            title: "Electronics lab: soldering and prototyping".into(),
            kind: "Other".into(),
            hours: 2,
            date: date(2024, 4, 5),
            status: Status::Completed,
            proof: Proof::Plain("Photos of the finished circuits".into()),
            description: "Practical soldering session and circuit prototyping in the \
                          electronics lab."
                .into(),
            reflection: Reflection::Text(
                "Soldered components on PCB, built clean connections and verified every \
                 circuit with a multimeter."
                    .into(),
            ),
            skills: vec![
                "Soldering".into(),
                "Electronics".into(),
                "Prototyping".into(),
                "Circuit testing".into(),
            ],
        },
    ]
}
