use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Research Ranger", "Source Scholar", "Fact Finder"];

const NOR: PolicyRef = PolicyRef {
    code: "WP:NOR",
    url: "https://en.wikipedia.org/wiki/Wikipedia:No_original_research",
};

const SYNTH: PolicyRef = PolicyRef {
    code: "WP:SYNTH",
    url: "https://en.wikipedia.org/wiki/Wikipedia:No_original_research#Synthesis_of_published_material",
};

const PSTS: PolicyRef = PolicyRef {
    code: "WP:PSTS",
    url: "https://en.wikipedia.org/wiki/Wikipedia:No_original_research#Primary,_secondary_and_tertiary_sources",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "What is 'original research' in the context of Wikipedia?",
        options: [
            "Academic research conducted by university professors",
            "Material for which no reliable, published source exists",
            "Research conducted specifically for a Wikipedia article",
            "Scientific experiments published in journals",
        ],
        correct_option: "Material for which no reliable, published source exists",
        explanation: "Original research is material for which no reliable, published source exists. That includes unpublished facts, arguments and ideas.",
        policy: Some(NOR),
    },
    Question {
        text: "Which of the following would be considered original research on Wikipedia?",
        options: [
            "Summarizing information from multiple reliable sources",
            "Quoting directly from a peer-reviewed journal",
            "Drawing a new conclusion by connecting facts from different sources",
            "Citing statistics from a government report",
        ],
        correct_option: "Drawing a new conclusion by connecting facts from different sources",
        explanation: "Combining facts from different sources to reach a conclusion none of them states is original research.",
        policy: Some(SYNTH),
    },
    Question {
        text: "Which type of source is generally preferred for Wikipedia articles?",
        options: [
            "Primary sources",
            "Secondary sources",
            "Tertiary sources",
            "All source types are equally preferred",
        ],
        correct_option: "Secondary sources",
        explanation: "Articles should rely mainly on secondary sources, which analyse and interpret primary material.",
        policy: Some(PSTS),
    },
    Question {
        text: "What constitutes 'synthesis' in Wikipedia?",
        options: [
            "Combining multiple sources to create a comprehensive article",
            "Summarizing a single source accurately",
            "Combining different sources to advance a novel position not stated by the sources",
            "Translating information from a foreign-language source",
        ],
        correct_option: "Combining different sources to advance a novel position not stated by the sources",
        explanation: "Synthesis is combining sources to imply a conclusion that none of the sources states explicitly.",
        policy: Some(SYNTH),
    },
    Question {
        text: "Which of the following is a legitimate way to add information to Wikipedia?",
        options: [
            "Adding your expert opinion on the topic",
            "Adding information from your unpublished research",
            "Adding information from reliable, published sources",
            "Adding information that seems obviously true",
        ],
        correct_option: "Adding information from reliable, published sources",
        explanation: "Content must be attributable to reliable, published sources. Expert opinion and unpublished research are not enough.",
        policy: Some(NOR),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "What Is Original Research?",
        description: "Understanding original research in the context of Wikipedia.",
        key_points: &[
            "Material for which no reliable, published source exists",
            "Analysis or synthesis of published material that reaches conclusions not stated by sources",
            "Personal views, experiences, or interpretations",
        ],
    },
    Lesson {
        title: "Primary, Secondary, and Tertiary Sources",
        description: "Understanding different types of sources in Wikipedia.",
        key_points: &[
            "Primary sources: Original materials close to an event, like interviews or autobiographies",
            "Secondary sources: Interpretations of primary sources, like scholarly analysis",
            "Tertiary sources: Publications that summarize primary and secondary sources",
        ],
    },
    Lesson {
        title: "Synthesis of Published Material",
        description: "How combining sources can create original research.",
        key_points: &[
            "Combining information from multiple sources to reach a novel conclusion",
            "Drawing connections between sources that the sources themselves don't make",
            "Using multiple primary sources to reach a conclusion not stated by any source",
        ],
    },
    Lesson {
        title: "Avoiding Original Research",
        description: "Practical tips for avoiding original research in your edits.",
        key_points: &[
            "Base all contributions on reliable, published sources",
            "Represent what the sources actually say without adding your own interpretation",
            "When in doubt, rely more on direct quotations and clear paraphrasing",
        ],
    },
    Lesson {
        title: "Research vs. Original Research",
        description: "Understanding the difference between research and original research.",
        key_points: &[
            "Research: Finding and consulting reliable sources (encouraged)",
            "Original research: Adding unpublished ideas or novel conclusions (prohibited)",
            "Wikipedia aims to summarize existing knowledge, not create new knowledge",
        ],
    },
];
