use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Copyright Captain", "License Luminary", "Attribution Ace"];

const COPYRIGHTS: PolicyRef = PolicyRef {
    code: "WP:C",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Copyrights",
};

const COPYVIO: PolicyRef = PolicyRef {
    code: "WP:COPYVIO",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Copyright_violations",
};

const NFC: PolicyRef = PolicyRef {
    code: "WP:NFC",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Non-free_content",
};

const PD: PolicyRef = PolicyRef {
    code: "WP:PD",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Public_domain",
};

const IUP: PolicyRef = PolicyRef {
    code: "WP:IUP",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Image_use_policy",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "Under what license is Wikipedia content available?",
        options: [
            "All rights reserved",
            "Creative Commons Attribution-ShareAlike (CC BY-SA)",
            "Public domain",
            "GNU General Public License",
        ],
        correct_option: "Creative Commons Attribution-ShareAlike (CC BY-SA)",
        explanation: "Wikipedia text is available under CC BY-SA, which allows reuse and modification with attribution and the same license.",
        policy: Some(COPYRIGHTS),
    },
    Question {
        text: "Which of the following would be a copyright violation on Wikipedia?",
        options: [
            "Copying text directly from a book published in 1880",
            "Copying text directly from a news article published last week",
            "Writing information in your own words after reading multiple sources",
            "Using an image that the photographer has licensed under CC BY-SA",
        ],
        correct_option: "Copying text directly from a news article published last week",
        explanation: "A recent news article is still under copyright. Copying its text verbatim is a violation. Paraphrase and cite instead.",
        policy: Some(COPYVIO),
    },
    Question {
        text: "What is 'fair use' in the context of Wikipedia?",
        options: [
            "Using copyrighted content without permission for any educational purpose",
            "A doctrine that allows unlimited use of any content as long as you cite the source",
            "A limited exception to copyright restrictions that is highly restricted on Wikipedia",
            "Using content that's been published for at least 10 years",
        ],
        correct_option: "A limited exception to copyright restrictions that is highly restricted on Wikipedia",
        explanation: "Non-free content, such as fair use material, is allowed only under strict criteria and only when no free alternative exists.",
        policy: Some(NFC),
    },
    Question {
        text: "What does it mean when a work is in the 'public domain'?",
        options: [
            "It is available on the public internet",
            "It is owned by the public and not subject to copyright",
            "It has been published by a government",
            "It has been seen by many people",
        ],
        correct_option: "It is owned by the public and not subject to copyright",
        explanation: "Public domain works are not protected by copyright, either because it expired or never applied. Anyone can use them.",
        policy: Some(PD),
    },
    Question {
        text: "What should you do if you want to use an image on Wikipedia?",
        options: [
            "Use any image you find online as long as you credit the source",
            "Only use images that are freely licensed or in the public domain",
            "Ask permission from the copyright holder via email",
            "Use any image as long as it's for educational purposes",
        ],
        correct_option: "Only use images that are freely licensed or in the public domain",
        explanation: "Images must be freely licensed or in the public domain. Non-free images need a specific justification that meets the non-free content criteria.",
        policy: Some(IUP),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "Copyright Basics",
        description: "Understanding copyright law as it relates to Wikipedia.",
        key_points: &[
            "Wikipedia content is licensed under the Creative Commons Attribution-ShareAlike License",
            "Editors must only add content that is either free of copyright or properly licensed",
            "Copyright violations can lead to content being removed and possible legal issues",
        ],
    },
    Lesson {
        title: "Free Licenses",
        description: "Understanding the licenses that Wikipedia uses.",
        key_points: &[
            "Wikipedia primarily uses the CC BY-SA license",
            "Free licenses allow content to be used, modified, and shared by anyone",
            "Different types of media may use different specific licenses",
        ],
    },
    Lesson {
        title: "Copyright Violations",
        description: "How to avoid and handle copyright violations on Wikipedia.",
        key_points: &[
            "Never copy text directly from copyrighted sources",
            "Write information in your own words after reading sources",
            "Report copyright violations when you spot them",
        ],
    },
    Lesson {
        title: "Fair Use",
        description: "Understanding fair use limitations on Wikipedia.",
        key_points: &[
            "Fair use on Wikipedia is highly restricted and discouraged",
            "Free content is always preferred over fair use claims",
            "Fair use claims must meet specific criteria and include a rationale",
        ],
    },
    Lesson {
        title: "Public Domain",
        description: "Understanding what public domain means for Wikipedia content.",
        key_points: &[
            "Public domain works can be used on Wikipedia without restrictions",
            "Works enter the public domain when copyright expires or through other means",
            "Copyright duration varies by country and depends on multiple factors",
        ],
    },
];
