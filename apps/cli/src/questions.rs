//! The five assessment questions. Static configuration: wording and keyword
//! sets are part of the product and never constructed at runtime.

pub struct Question {
    pub number: usize,
    pub text: &'static str,
    pub options: &'static [Opt],
}

/// One selectable answer: display text plus the comma-separated keyword set
/// recorded when this option is chosen.
pub struct Opt {
    pub text: &'static str,
    pub keywords: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        number: 1,
        text: "When facing unexpected challenges or setbacks, what is your most natural response?",
        options: &[
            Opt {
                text: "I feel immediately overwhelmed and react strongly",
                keywords: "reactive, overwhelming, scattered, intense, turbulent",
            },
            Opt {
                text: "I become anxious and worry about outcomes",
                keywords: "anxious, worried, uncertain, restless, concerned",
            },
            Opt {
                text: "I pause to analyze and plan my response",
                keywords: "analyzing, planning, methodical, logical, structured",
            },
            Opt {
                text: "I accept what is and adapt with minimal resistance",
                keywords: "accepting, flowing, adaptable, resilient, balanced",
            },
        ],
    },
    Question {
        number: 2,
        text: "How do you typically respond to criticism or negative feedback from others?",
        options: &[
            Opt {
                text: "I feel hurt and become defensive",
                keywords: "defensive, hurt, rejected, wounded, protective",
            },
            Opt {
                text: "I ruminate and question my self-worth",
                keywords: "ruminating, doubting, questioning, insecure, overthinking",
            },
            Opt {
                text: "I evaluate if there's truth to consider",
                keywords: "evaluating, discerning, selective, rational, measured",
            },
            Opt {
                text: "I receive it as information for growth",
                keywords: "grateful, learning, growing, open, receptive",
            },
        ],
    },
    Question {
        number: 3,
        text: "When experiencing intense emotions (anger, sadness, fear), what best describes your \
                relationship with them?",
        options: &[
            Opt {
                text: "I become completely consumed by the emotion",
                keywords: "consumed, identified, merged, lost, overwhelmed",
            },
            Opt {
                text: "I try to suppress or avoid the feeling",
                keywords: "suppressing, avoiding, numbing, escaping, denying",
            },
            Opt {
                text: "I work through it with effort and understanding",
                keywords: "understanding, processing, working, healing, therapeutic",
            },
            Opt {
                text: "I observe it with spacious awareness",
                keywords: "witnessing, observing, spacious, present, aware",
            },
        ],
    },
    Question {
        number: 4,
        text: "How do you approach situations where you cannot control the outcome?",
        options: &[
            Opt {
                text: "I fight harder to maintain control",
                keywords: "fighting, forcing, pushing, struggling, resisting",
            },
            Opt {
                text: "I feel frustrated and helpless",
                keywords: "frustrated, helpless, powerless, defeated, stuck",
            },
            Opt {
                text: "I focus on what I can influence",
                keywords: "focusing, manageable, practical, actionable, organized",
            },
            Opt {
                text: "I surrender to the flow of life",
                keywords: "surrendering, trusting, releasing, peaceful, flowing",
            },
        ],
    },
    Question {
        number: 5,
        text: "What is your relationship with pleasure and success versus pain and failure?",
        options: &[
            Opt {
                text: "I cling to pleasure and desperately avoid pain",
                keywords: "clinging, addicted, desperate, dependent, attached",
            },
            Opt {
                text: "I swing between highs and lows dramatically",
                keywords: "swinging, unstable, moody, reactive, volatile",
            },
            Opt {
                text: "I try to maintain balance through discipline",
                keywords: "moderating, balancing, managing, controlled, disciplined",
            },
            Opt {
                text: "I remain relatively unchanged by either",
                keywords: "equanimous, steady, unchanged, centered, stable",
            },
        ],
    },
];
