use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Pillar Pro", "Foundation Master", "Wiki Architect"];

const FIVE_PILLARS: PolicyRef = PolicyRef {
    code: "WP:5P",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Five_pillars",
};

const NPOV: PolicyRef = PolicyRef {
    code: "WP:NPOV",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Neutral_point_of_view",
};

const COPYRIGHTS: PolicyRef = PolicyRef {
    code: "WP:C",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Copyrights",
};

const CIVIL: PolicyRef = PolicyRef {
    code: "WP:CIVIL",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Civility",
};

const IAR: PolicyRef = PolicyRef {
    code: "WP:IAR",
    url: "https://en.wikipedia.org/wiki/Wikipedia:Ignore_all_rules",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "What is the first pillar of Wikipedia?",
        options: [
            "Wikipedia is a social networking site",
            "Wikipedia is an encyclopedia",
            "Wikipedia is a dictionary",
            "Wikipedia is a blog",
        ],
        correct_option: "Wikipedia is an encyclopedia",
        explanation: "Wikipedia's first pillar is that it is an encyclopedia. It is not a soapbox, an advertising platform, a dictionary or a blog.",
        policy: Some(FIVE_PILLARS),
    },
    Question {
        text: "What does 'neutral point of view' mean in Wikipedia?",
        options: [
            "Articles should only present the most popular viewpoint",
            "Articles should only include facts, not opinions",
            "Articles should represent all significant viewpoints fairly and without bias",
            "Articles should be written from the editor's perspective",
        ],
        correct_option: "Articles should represent all significant viewpoints fairly and without bias",
        explanation: "NPOV means representing all significant views published by reliable sources fairly, proportionately and without editorial bias.",
        policy: Some(NPOV),
    },
    Question {
        text: "Under what license is Wikipedia content available?",
        options: [
            "All rights reserved",
            "Public domain",
            "Creative Commons Attribution-ShareAlike License",
            "GNU General Public License",
        ],
        correct_option: "Creative Commons Attribution-ShareAlike License",
        explanation: "Wikipedia is free content. Text is released under the Creative Commons Attribution-ShareAlike license, so anyone can reuse it with attribution.",
        policy: Some(COPYRIGHTS),
    },
    Question {
        text: "How should Wikipedia editors interact with each other?",
        options: [
            "With respect and civility, even during disagreements",
            "By asserting dominance to establish editorial authority",
            "By avoiding all interaction to prevent conflicts",
            "By competing to make the most edits",
        ],
        correct_option: "With respect and civility, even during disagreements",
        explanation: "The fourth pillar asks editors to treat each other with respect and civility, even when they disagree.",
        policy: Some(CIVIL),
    },
    Question {
        text: "What does the fifth pillar 'Wikipedia has no firm rules' mean?",
        options: [
            "Editors can ignore all guidelines and policies",
            "The principles and spirit of rules matter more than literal wording",
            "Wikipedia has no rules at all",
            "Rules only apply to new editors",
        ],
        correct_option: "The principles and spirit of rules matter more than literal wording",
        explanation: "Policies and guidelines are not carved in stone. Their spirit matters more than their literal wording, and they evolve over time.",
        policy: Some(IAR),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "Wikipedia is an encyclopedia",
        description: "Wikipedia is an online encyclopedia that anyone can edit. It contains articles on topics in every field of knowledge, from history to science to popular culture.",
        key_points: &[
            "Wikipedia is an encyclopedia, not a platform for other purposes",
            "Content should be informational and educational",
            "Promotional content, dictionary definitions, and news don't belong in Wikipedia",
        ],
    },
    Lesson {
        title: "Wikipedia is written from a neutral point of view",
        description: "All Wikipedia articles must be written from a neutral point of view, representing significant views fairly, proportionately and without bias.",
        key_points: &[
            "Articles must represent all significant viewpoints fairly",
            "Content should be presented without bias",
            "Personal opinions and advocacy don't belong in Wikipedia articles",
        ],
    },
    Lesson {
        title: "Wikipedia is free content",
        description: "Wikipedia's content can be edited, used, and redistributed by anyone, subject to certain terms. All text is available under the Creative Commons Attribution-ShareAlike License.",
        key_points: &[
            "Content is freely available for anyone to use, modify, and distribute",
            "Contributions are licensed under Creative Commons Attribution-ShareAlike License",
            "Copyright violations are strictly prohibited",
        ],
    },
    Lesson {
        title: "Wikipedia editors should treat each other with respect and civility",
        description: "Wikipedians should interact with each other in a respectful and civil manner. Respect other editors, even when you disagree.",
        key_points: &[
            "Treat other editors with respect, even during disagreements",
            "Avoid personal attacks and assume good faith",
            "Follow dispute resolution procedures when conflicts arise",
        ],
    },
    Lesson {
        title: "Wikipedia has no firm rules",
        description: "Wikipedia has policies and guidelines, but they are not carved in stone. The principles and spirit of Wikipedia's rules matter more than their literal wording.",
        key_points: &[
            "Policies and guidelines can evolve over time",
            "The spirit of rules matters more than literal wording",
            "Be bold in editing, and don't worry about making mistakes",
        ],
    },
];
