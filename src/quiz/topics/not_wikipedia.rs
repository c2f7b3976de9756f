use crate::quiz::lesson::Lesson;
use crate::quiz::{PolicyRef, Question};

pub const BADGES: [&str; 3] = ["Boundary Guardian", "Scope Sentinel", "Purpose Protector"];

const SOAPBOX: PolicyRef = PolicyRef {
    code: "WP:SOAP",
    url: "https://en.wikipedia.org/wiki/Wikipedia:What_Wikipedia_is_not#Wikipedia_is_not_a_soapbox_or_means_of_promotion",
};

const NOR: PolicyRef = PolicyRef {
    code: "WP:NOR",
    url: "https://en.wikipedia.org/wiki/Wikipedia:No_original_research",
};

const NOTSOCIAL: PolicyRef = PolicyRef {
    code: "WP:NOTSOCIAL",
    url: "https://en.wikipedia.org/wiki/Wikipedia:What_Wikipedia_is_not#Wikipedia_is_not_a_blog,_web_hosting_service,_social_networking_service,_or_memorial_site",
};

pub const QUESTIONS: [Question; 5] = [
    Question {
        text: "Which of the following is NOT an appropriate use of Wikipedia?",
        options: [
            "Creating an article about a notable historical event",
            "Creating an article that promotes your business",
            "Expanding an article with information from reliable sources",
            "Adding citations to verify facts in an article",
        ],
        correct_option: "Creating an article that promotes your business",
        explanation: "Wikipedia is not a soapbox or a means of promotion. Articles about businesses must be neutral and based on independent sources.",
        policy: Some(SOAPBOX),
    },
    Question {
        text: "Why is Wikipedia not a place for original research?",
        options: [
            "Because original research is always inaccurate",
            "Because Wikipedia only accepts information that has been published in reliable sources",
            "Because original research is too advanced for most readers",
            "Because Wikipedia prefers outdated information",
        ],
        correct_option: "Because Wikipedia only accepts information that has been published in reliable sources",
        explanation: "Wikipedia summarizes what reliable sources have already published. Unpublished ideas have no source a reader can check.",
        policy: Some(NOR),
    },
    Question {
        text: "What should you do if you want to add information about a new scientific theory you've developed?",
        options: [
            "Add it to Wikipedia immediately to share your discovery",
            "Create a new article dedicated to your theory",
            "Publish your theory in a peer-reviewed journal first, then cite that publication",
            "Add it to your user page on Wikipedia",
        ],
        correct_option: "Publish your theory in a peer-reviewed journal first, then cite that publication",
        explanation: "A new theory must first be published and discussed in reliable sources. Only then can it be summarized and cited on Wikipedia.",
        policy: Some(NOR),
    },
    Question {
        text: "Why is Wikipedia not a social networking site?",
        options: [
            "Because Wikipedia doesn't have enough server capacity",
            "Because Wikipedia is focused on building an encyclopedia, not personal connections",
            "Because Wikipedia users are not interested in socializing",
            "Because Wikipedia is only for academic use",
        ],
        correct_option: "Because Wikipedia is focused on building an encyclopedia, not personal connections",
        explanation: "Wikipedia exists to build an encyclopedia. It is not a social network or a place for personal connections.",
        policy: Some(NOTSOCIAL),
    },
    Question {
        text: "Which of the following would be inappropriate for a Wikipedia article?",
        options: [
            "A comprehensive biography of a notable politician",
            "A memorial page for your recently deceased pet",
            "An article about a significant historical event",
            "An article about a well-known scientific theory",
        ],
        correct_option: "A memorial page for your recently deceased pet",
        explanation: "Wikipedia is not a memorial site. Subjects need significant coverage in reliable sources to have an article.",
        policy: Some(NOTSOCIAL),
    },
];

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        title: "Wikipedia is not a dictionary",
        description: "Wikipedia is not a dictionary, phrasebook, or a slang guide.",
        key_points: &[
            "Instead of: Creating an article that only defines a term without providing encyclopedic context. Do: Creating an article that defines a term and provides comprehensive information about its history, usage, and significance.",
            "Instead of: Adding multiple dictionary definitions to an article. Do: Focusing on encyclopedic content while beginning with a clear definition.",
        ],
    },
    Lesson {
        title: "Wikipedia is not a publisher of original thought",
        description: "Wikipedia is not a place to publish your own thoughts, experiences, or arguments.",
        key_points: &[
            "Instead of: Adding your personal theory about a historical event. Do: Citing reliable sources that present established theories about the event.",
            "Instead of: Writing an article based on your own research findings. Do: Writing an article based on information published in reliable sources.",
        ],
    },
    Lesson {
        title: "Wikipedia is not a soapbox",
        description: "Wikipedia is not a platform for propaganda, advocacy, or recruitment.",
        key_points: &[
            "Instead of: Writing an article that promotes a particular political viewpoint. Do: Writing an article that presents multiple political viewpoints in a neutral manner.",
            "Instead of: Using Wikipedia to campaign for a cause. Do: Creating an article that objectively describes a cause and its significance.",
        ],
    },
    Lesson {
        title: "Wikipedia is not a mirror or a repository of links, images, or media files",
        description: "Wikipedia articles are not mere collections of external links or media files.",
        key_points: &[
            "Instead of: Creating an article that is primarily a list of external links. Do: Creating an article with comprehensive content that includes relevant external links in a 'Further reading' or 'External links' section.",
            "Instead of: Uploading images that aren't used in any articles. Do: Only uploading images that enhance the encyclopedic content of articles.",
        ],
    },
    Lesson {
        title: "Wikipedia is not a blog, social networking site, or memorial site",
        description: "Wikipedia is not a place for self-promotion, autobiography, or memorials.",
        key_points: &[
            "Instead of: Creating a personal profile page about yourself. Do: Creating an article about a notable person with reliable sources.",
            "Instead of: Using Wikipedia to memorialize a deceased loved one. Do: Creating an article about a deceased person who meets Wikipedia's notability guidelines.",
        ],
    },
];
