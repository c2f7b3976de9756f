use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Neutrality Ninja", "Balance Keeper", "Fairness Facilitator"];

const NPOV: PolicyRef = PolicyRef {
    code: "WP:NPOV",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Neutral_point_of_view",
};

const UNDUE: PolicyRef = PolicyRef {
    code: "WP:UNDUE",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Neutral_point_of_view#Due_and_undue_weight",
};

const WEASEL: PolicyRef = PolicyRef {
    code: "WP:WEASEL",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Manual_of_Style/Words_to_watch#Unsupported_attributions",
};

const NPOVD: PolicyRef = PolicyRef {
    code: "WP:NPOVD",
    url: "https://en.wikipedia.org/wiki/Wikipedia:NPOV_dispute",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "What does 'neutral point of view' require of a Wikipedia article?",
        options: [
            "Presenting only the majority view",
            "Representing all significant published views fairly and proportionately",
            "Giving every opinion exactly equal space",
            "Avoiding any mention of disagreement",
        ],
        correct_option: "Representing all significant published views fairly and proportionately",
        explanation: "NPOV means representing fairly, proportionately and without editorial bias all significant views published by reliable sources.",
        policy: Some(NPOV),
    },
    Question {
        text: "How much coverage should a view held by a tiny minority receive?",
        options: [
            "The same coverage as mainstream views",
            "None at all, even if reliable sources discuss it",
            "Coverage in proportion to its prominence in reliable sources",
            "Whatever the editor who adds it thinks is fair",
        ],
        correct_option: "Coverage in proportion to its prominence in reliable sources",
        explanation: "Balance follows the sources. Tiny-minority views should not get the same weight as mainstream ones.",
        policy: Some(UNDUE),
    },
    Question {
        text: "Which phrase is an example of a weasel word?",
        options: [
            "According to a 2020 study in Nature,",
            "Some people say",
            "The city council voted 7 to 2",
            "The report was published in March",
        ],
        correct_option: "Some people say",
        explanation: "Vague attributions like 'some people say' hide who holds a view. Name the source instead.",
        policy: Some(WEASEL),
    },
    Question {
        text: "How should opinions on a contentious topic be presented?",
        options: [
            "As established fact when most editors agree",
            "Attributed to the specific reliable sources that hold them",
            "Left out of the article entirely",
            "Framed as 'the truth' versus mere 'claims'",
        ],
        correct_option: "Attributed to the specific reliable sources that hold them",
        explanation: "Attribute opinions and disputed claims to the reliable sources that make them. Do not state them in Wikipedia's own voice.",
        policy: Some(NPOV),
    },
    Question {
        text: "Where should you raise a concern that an article is not neutral?",
        options: [
            "By reverting the article until it matches your view",
            "On the article's talk page, pointing to the specific content and policy",
            "In a note inside the article text",
            "On social media",
        ],
        correct_option: "On the article's talk page, pointing to the specific content and policy",
        explanation: "Raise neutrality concerns on the talk page. Point to the specific text and the policy. Do not edit-war.",
        policy: Some(NPOVD),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "What is Neutral Point of View?",
        description: "Understanding the core principle of neutrality in Wikipedia.",
        key_points: &[
            "Represent all significant viewpoints fairly and without bias",
            "Present competing views in proportion to their prominence in reliable sources",
            "Do not take sides on controversial issues",
        ],
    },
    Lesson {
        title: "Achieving Balance",
        description: "How to present multiple viewpoints in a balanced way.",
        key_points: &[
            "Present viewpoints in proportion to their prominence in reliable sources",
            "Don't give undue weight to minority views",
            "Balance doesn't mean equal coverage for all viewpoints",
        ],
    },
    Lesson {
        title: "Words to Watch",
        description: "How language choices can affect neutrality.",
        key_points: &[
            "Avoid peacock terms (words of praise) like 'excellent' or 'extraordinary'",
            "Avoid weasel words that make vague attributions like 'some people say'",
            "Use straightforward, factual language instead of editorializing",
        ],
    },
    Lesson {
        title: "Contentious Topics",
        description: "Handling controversial or divisive subjects.",
        key_points: &[
            "Attribute opinions and disputed claims to their sources",
            "Avoid framing one view as 'the truth' and others as merely 'claims'",
            "Be particularly careful with politically, religiously, or culturally sensitive topics",
        ],
    },
    Lesson {
        title: "NPOV Disputes",
        description: "How to handle disagreements about neutrality.",
        key_points: &[
            "Discuss NPOV concerns on the article's talk page",
            "Be specific about which content you believe violates neutrality",
            "Focus on improving the article rather than winning arguments",
        ],
    },
];
