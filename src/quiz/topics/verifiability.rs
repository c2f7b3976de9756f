use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Source Sleuth", "Citation Champion", "Verification Virtuoso"];

const V: PolicyRef = PolicyRef {
    code: "WP:V",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Verifiability",
};

const RS: PolicyRef = PolicyRef {
    code: "WP:RS",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Reliable_sources",
};

const BURDEN: PolicyRef = PolicyRef {
    code: "WP:BURDEN",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Verifiability#Responsibility_for_providing_citations",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "What does verifiability mean in Wikipedia?",
        options: [
            "That all information must be true",
            "That information can be checked against reliable, published sources",
            "That all information must be verified by Wikipedia administrators",
            "That information must be popular or widely known",
        ],
        correct_option: "That information can be checked against reliable, published sources",
        explanation: "Verifiability means readers can check that content comes from a reliable, published source. Being true is not enough on its own.",
        policy: Some(V),
    },
    Question {
        text: "Which of the following is generally considered a reliable source?",
        options: [
            "A personal blog",
            "A social media post",
            "A peer-reviewed academic journal",
            "A self-published book",
        ],
        correct_option: "A peer-reviewed academic journal",
        explanation: "Peer-reviewed journals have editorial oversight and fact-checking. Blogs, social media posts and self-published books generally do not.",
        policy: Some(RS),
    },
    Question {
        text: "When should you add a citation to Wikipedia?",
        options: [
            "Only when adding controversial information",
            "Only when specifically asked by another editor",
            "For any material challenged or likely to be challenged",
            "Only for direct quotes",
        ],
        correct_option: "For any material challenged or likely to be challenged",
        explanation: "Any material that is challenged or likely to be challenged needs an inline citation to a reliable source.",
        policy: Some(V),
    },
    Question {
        text: "Who has the burden of providing citations?",
        options: [
            "Wikipedia administrators",
            "The editor who adds or restores material",
            "The editor who challenges the material",
            "The subject of the article",
        ],
        correct_option: "The editor who adds or restores material",
        explanation: "The burden to demonstrate verifiability lies with the editor who adds or restores material.",
        policy: Some(BURDEN),
    },
    Question {
        text: "What should you do if you can't find a reliable source for information?",
        options: [
            "Add the information anyway, and note that it needs a citation",
            "Create your own source by publishing the information on a blog",
            "Rewrite the statement in a way that is easier to verify, or remove it",
            "Ask an administrator to verify it for you",
        ],
        correct_option: "Rewrite the statement in a way that is easier to verify, or remove it",
        explanation: "If no reliable source can be found, the material should not stay. Rephrase it so it can be verified, or remove it.",
        policy: Some(BURDEN),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "Verifiability Basics",
        description: "The core principle of verifiability in Wikipedia.",
        key_points: &[
            "Information must be attributable to reliable, published sources",
            "Articles should contain only material that has been published by reliable sources",
            "Readers must be able to check that Wikipedia content has already been published by a reliable source",
        ],
    },
    Lesson {
        title: "Reliable Sources",
        description: "What makes a source reliable for Wikipedia.",
        key_points: &[
            "Academic and peer-reviewed publications are generally considered reliable",
            "Books published by university presses and mainstream newspapers are often reliable",
            "Self-published sources like personal blogs, social media posts, or self-published books are generally not reliable",
        ],
    },
    Lesson {
        title: "Citations and References",
        description: "How to properly cite sources in Wikipedia.",
        key_points: &[
            "All material challenged or likely to be challenged must be attributed to a reliable source",
            "Citations help readers verify information and find more details",
            "Proper citation formats help maintain consistency across Wikipedia",
        ],
    },
    Lesson {
        title: "Burden of Evidence",
        description: "Who is responsible for providing sources.",
        key_points: &[
            "Editors who add content must provide citations to reliable sources",
            "Unsourced material may be removed by any editor",
            "When adding controversial content, add the citation at the same time",
        ],
    },
    Lesson {
        title: "Verifiability in Practice",
        description: "Real-world application of verifiability.",
        key_points: &[
            "Always provide citations for contentious or challenged material",
            "Evaluate sources based on reputation, publisher, and editorial process",
            "Secondary sources are often preferred over primary sources",
        ],
    },
];
