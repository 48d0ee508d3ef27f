//! Immutable keyword tables backing the clinical text analyzer.
//!
//! All tables are module-scoped constants. The analyzer only ever reads
//! them, so concurrent analysis needs no locking.

use crate::models::BodySystem;

/// Maximum number of key findings returned per analysis.
pub const MAX_KEY_FINDINGS: usize = 5;

/// Maximum number of ranked differential entries returned per analysis.
pub const MAX_DIFFERENTIAL_ENTRIES: usize = 4;

/// Candidate condition attached to a differential trigger keyword.
///
/// Probabilities are fixed editorial estimates and the reasoning strings are
/// canned clinical prose; neither is inferred from the analyzed text.
#[derive(Debug, Clone, Copy)]
pub struct DifferentialCandidate {
    pub condition: &'static str,
    pub probability: u8,
    pub reasoning: &'static str,
}

/// Symptom trigger keywords in priority order. The first trigger found in
/// the lowercased text contributes its full candidate list; triggers are
/// not merged for multi-symptom presentations.
pub const DIFFERENTIAL_TRIGGERS: &[(&str, &[DifferentialCandidate])] = &[
    (
        "chest pain",
        &[
            DifferentialCandidate {
                condition: "Gastroesophageal Reflux Disease (GERD)",
                probability: 75,
                reasoning: "Burning quality and relationship to meals are characteristic of reflux-related chest pain.",
            },
            DifferentialCandidate {
                condition: "Costochondritis",
                probability: 65,
                reasoning: "Reproducible chest wall tenderness favors a musculoskeletal origin.",
            },
            DifferentialCandidate {
                condition: "Anxiety-related chest pain",
                probability: 45,
                reasoning: "Episodic chest tightness without an exertional pattern can accompany anxiety.",
            },
        ],
    ),
    (
        "headache",
        &[
            DifferentialCandidate {
                condition: "Tension-type headache",
                probability: 70,
                reasoning: "Bilateral band-like pressure without aura is typical of tension-type headache.",
            },
            DifferentialCandidate {
                condition: "Migraine",
                probability: 55,
                reasoning: "Episodic throbbing pain with photophobia or nausea would support migraine.",
            },
            DifferentialCandidate {
                condition: "Cervicogenic headache",
                probability: 35,
                reasoning: "Occipital pain provoked by neck movement suggests a cervicogenic source.",
            },
        ],
    ),
    (
        "fatigue",
        &[
            DifferentialCandidate {
                condition: "Iron deficiency anemia",
                probability: 60,
                reasoning: "Gradual-onset fatigue with exertional intolerance is consistent with anemia.",
            },
            DifferentialCandidate {
                condition: "Hypothyroidism",
                probability: 55,
                reasoning: "Fatigue with cold intolerance and weight gain points toward hypothyroidism.",
            },
            DifferentialCandidate {
                condition: "Depression",
                probability: 40,
                reasoning: "Persistent fatigue with low mood may reflect an underlying depressive disorder.",
            },
        ],
    ),
    (
        "cough",
        &[
            DifferentialCandidate {
                condition: "Upper respiratory infection",
                probability: 70,
                reasoning: "Acute cough with congestion most often reflects a viral upper respiratory infection.",
            },
            DifferentialCandidate {
                condition: "Upper airway cough syndrome",
                probability: 50,
                reasoning: "Persistent throat clearing and postnasal drainage suggest upper airway cough syndrome.",
            },
            DifferentialCandidate {
                condition: "Asthma",
                probability: 40,
                reasoning: "Nocturnal or exercise-provoked cough raises the possibility of cough-variant asthma.",
            },
        ],
    ),
];

/// Generic fallback when no trigger keyword is present.
pub const DEFAULT_DIFFERENTIAL: &[DifferentialCandidate] = &[
    DifferentialCandidate {
        condition: "Viral syndrome",
        probability: 40,
        reasoning: "A nonspecific presentation most often reflects a self-limited viral illness.",
    },
    DifferentialCandidate {
        condition: "Stress-related symptoms",
        probability: 30,
        reasoning: "Symptoms without localizing findings may be stress related.",
    },
];

/// Review-of-systems keyword tables, keyword -> display label per body
/// system. Label order in the output follows table order; duplicate labels
/// within a category are suppressed (e.g. "shortness of breath" and
/// "dyspnea" both map to "Dyspnea").
pub const ROS_KEYWORDS: &[(BodySystem, &[(&str, &str)])] = &[
    (
        BodySystem::Constitutional,
        &[
            ("fever", "Fever"),
            ("chills", "Chills"),
            ("fatigue", "Fatigue"),
            ("weight loss", "Weight loss"),
            ("night sweats", "Night sweats"),
            ("malaise", "Malaise"),
        ],
    ),
    (
        BodySystem::Cardiovascular,
        &[
            ("chest pain", "Chest pain"),
            ("palpitations", "Palpitations"),
            ("shortness of breath", "Dyspnea"),
            ("dyspnea", "Dyspnea"),
            ("edema", "Edema"),
        ],
    ),
    (
        BodySystem::Respiratory,
        &[
            ("cough", "Cough"),
            ("wheezing", "Wheezing"),
            ("sputum", "Sputum production"),
            ("hemoptysis", "Hemoptysis"),
        ],
    ),
    (
        BodySystem::Gastrointestinal,
        &[
            ("nausea", "Nausea"),
            ("vomiting", "Vomiting"),
            ("diarrhea", "Diarrhea"),
            ("constipation", "Constipation"),
            ("abdominal pain", "Abdominal pain"),
        ],
    ),
    (
        BodySystem::Neurological,
        &[
            ("headache", "Headache"),
            ("dizziness", "Dizziness"),
            ("numbness", "Numbness"),
            ("tingling", "Tingling"),
            ("seizure", "Seizures"),
            ("weakness", "Weakness"),
        ],
    ),
    (
        BodySystem::Musculoskeletal,
        &[
            ("joint pain", "Joint pain"),
            ("back pain", "Back pain"),
            ("muscle aches", "Myalgias"),
            ("myalgia", "Myalgias"),
            ("stiffness", "Stiffness"),
        ],
    ),
    (
        BodySystem::Psychiatric,
        &[
            ("anxiety", "Anxiety"),
            ("depression", "Depressed mood"),
            ("depressed mood", "Depressed mood"),
            ("insomnia", "Insomnia"),
        ],
    ),
];

/// Minimum character length for a token to qualify as a key phrase.
pub const KEY_PHRASE_MIN_LEN: usize = 6;

/// Minimum occurrences for a token to qualify as a key phrase.
pub const KEY_PHRASE_MIN_COUNT: usize = 2;

/// Common charting words excluded from key-phrase derivation.
pub const KEY_PHRASE_STOPWORDS: &[&str] = &[
    "patient", "patients", "without", "within", "normal", "denies", "reports",
    "presents", "present", "history", "negative", "positive", "limits",
    "bilateral", "states", "otherwise", "today", "follow",
];
