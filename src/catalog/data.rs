use super::{Category, Technique};

pub(super) static TECHNIQUES: &[Technique] = &[
    Technique {
        id: "think-pair-share",
        name: "Think-Pair-Share",
        category: Category::Engagement,
        description: "Students reflect on a question individually, discuss their thinking with a partner, and then share ideas with the whole class.",
        time_required: "5-10 minutes",
        best_for: "Any subject, any grade",
        benefits: &[
            "Gives every student time to form an answer",
            "Raises participation of quieter students",
            "Improves the quality of whole-class discussion",
        ],
        implementation_steps: &[
            "Pose an open-ended question or problem",
            "Give one to two minutes of silent thinking time",
            "Pair students and let them compare their ideas",
            "Invite several pairs to share with the class",
            "Summarize the key points on the board",
        ],
    },
    Technique {
        id: "exit-ticket",
        name: "Exit Ticket",
        category: Category::Assessment,
        description: "A short written response collected at the end of a lesson that shows what each student understood.",
        time_required: "3-5 minutes",
        best_for: "Checking understanding before the next lesson",
        benefits: &[
            "Quick evidence of learning from every student",
            "Helps plan the next lesson",
            "Encourages students to reflect on the lesson",
        ],
        implementation_steps: &[
            "Prepare one to three questions tied to the lesson objective",
            "Hand out cards or slips in the last minutes of class",
            "Collect the responses as students leave",
            "Sort responses into groups by level of understanding",
            "Adjust the next lesson based on what you see",
        ],
    },
    Technique {
        id: "jigsaw",
        name: "Jigsaw",
        category: Category::Collaboration,
        description: "Each member of a group becomes an expert on one part of the material and teaches it to the rest of the group.",
        time_required: "30-45 minutes",
        best_for: "Covering large amounts of reading",
        benefits: &[
            "Builds interdependence within groups",
            "Students learn by teaching",
            "Covers more material in less time",
        ],
        implementation_steps: &[
            "Split the material into equal segments",
            "Form home groups with one student per segment",
            "Send students to expert groups to study their segment",
            "Return students to home groups to teach their segment",
            "Check understanding of all segments with a short quiz",
        ],
    },
    Technique {
        id: "socratic-seminar",
        name: "Socratic Seminar",
        category: Category::Questioning,
        description: "A formal discussion based on a text in which the leader asks open-ended questions and students build on each other's reasoning.",
        time_required: "40-60 minutes",
        best_for: "Literature, history, and ethics",
        benefits: &[
            "Develops critical thinking",
            "Teaches respectful academic discourse",
            "Deepens understanding of complex texts",
        ],
        implementation_steps: &[
            "Choose a rich text and assign it in advance",
            "Prepare open-ended opening and core questions",
            "Arrange seats in a circle",
            "Agree on discussion norms",
            "Facilitate without giving answers",
            "Close with individual reflection",
        ],
    },
    Technique {
        id: "flipped-classroom",
        name: "Flipped Classroom",
        category: Category::TechnologyIntegration,
        description: "Students study new content at home through videos or readings, and class time is used for practice and problem solving.",
        time_required: "Whole lesson",
        best_for: "Middle school and older",
        benefits: &[
            "More class time for practice and feedback",
            "Students learn at their own pace",
            "Teacher can support individual students",
        ],
        implementation_steps: &[
            "Record or select a short video on the new topic",
            "Add a few check questions to the video",
            "Review the answers before class",
            "Plan practice activities for class time",
            "Group students by need during the lesson",
        ],
    },
    Technique {
        id: "tiered-assignments",
        name: "Tiered Assignments",
        category: Category::Differentiation,
        description: "Students work on the same concept at different levels of difficulty matched to their readiness.",
        time_required: "20-40 minutes",
        best_for: "Mixed-ability classes",
        benefits: &[
            "Every student works in their zone of proximal development",
            "Keeps advanced students challenged",
            "Supports students who need more scaffolding",
        ],
        implementation_steps: &[
            "Identify the key concept everyone must learn",
            "Use a pre-assessment to gauge readiness",
            "Design two or three versions of the task",
            "Assign tiers flexibly and revisit them often",
            "Bring the class together to share results",
        ],
    },
    Technique {
        id: "gallery-walk",
        name: "Gallery Walk",
        category: Category::ActiveLearning,
        description: "Students move around the room in small groups, responding to questions, images, or work samples posted on the walls.",
        time_required: "20-30 minutes",
        best_for: "Reviewing a unit or critiquing work",
        benefits: &[
            "Gets students moving",
            "Exposes students to many perspectives",
            "Works well for peer feedback",
        ],
        implementation_steps: &[
            "Post charts with prompts around the room",
            "Divide the class into small groups",
            "Give each group a set time at each station",
            "Ask groups to add comments on sticky notes",
            "Debrief the main ideas with the whole class",
        ],
    },
    Technique {
        id: "positive-narration",
        name: "Positive Narration",
        category: Category::ClassroomManagement,
        description: "The teacher describes out loud the desired behavior that students are already showing, instead of correcting those who are off task.",
        time_required: "Ongoing",
        best_for: "Transitions and routines",
        benefits: &[
            "Reinforces expectations without confrontation",
            "Builds a positive classroom climate",
            "Speeds up transitions",
        ],
        implementation_steps: &[
            "Give a clear, specific instruction",
            "Look for students who follow it right away",
            "Describe their behavior by name and in neutral terms",
            "Keep narrating until most students follow",
            "Address remaining students privately",
        ],
    },
    Technique {
        id: "fist-to-five",
        name: "Fist to Five",
        category: Category::Assessment,
        description: "Students show from zero to five fingers to signal how confident they feel about a concept.",
        time_required: "1-2 minutes",
        best_for: "Quick checks during instruction",
        benefits: &[
            "Instant picture of class confidence",
            "No materials needed",
            "Helps decide whether to move on",
        ],
        implementation_steps: &[
            "Explain what each number of fingers means",
            "Ask students to rate their confidence at the same time",
            "Scan the room and note low ratings",
            "Pair confident students with those who need help",
        ],
    },
    Technique {
        id: "wait-time",
        name: "Wait Time",
        category: Category::Questioning,
        description: "Pausing three to five seconds after asking a question and again after a student answers, so everyone has time to think.",
        time_required: "Seconds per question",
        best_for: "Whole-class questioning",
        benefits: &[
            "Longer and more thoughtful answers",
            "More students volunteer",
            "Fewer \"I don't know\" responses",
        ],
        implementation_steps: &[
            "Ask the question to the whole class",
            "Count silently to at least three",
            "Call on a student only after the pause",
            "Pause again after the answer before responding",
        ],
    },
    Technique {
        id: "learning-stations",
        name: "Learning Stations",
        category: Category::Differentiation,
        description: "The classroom is divided into stations with different activities, and students rotate through them in small groups.",
        time_required: "30-50 minutes",
        best_for: "Practice and review lessons",
        benefits: &[
            "Offers several ways to engage with content",
            "Allows small-group teaching",
            "Keeps energy high with regular movement",
        ],
        implementation_steps: &[
            "Plan three to five activities around one goal",
            "Prepare clear instructions for each station",
            "Set a timer and a rotation signal",
            "Run one station yourself for targeted support",
            "Close with a short reflection",
        ],
    },
    Technique {
        id: "game-based-review",
        name: "Game-Based Review",
        category: Category::Engagement,
        description: "Review material through a quiz game on an interactive platform, with points and friendly competition.",
        time_required: "10-20 minutes",
        best_for: "Review before a test",
        benefits: &[
            "High motivation and energy",
            "Instant feedback for every answer",
            "Reports show which questions were hardest",
        ],
        implementation_steps: &[
            "Write ten to fifteen review questions",
            "Load them into a quiz platform",
            "Let students join on their devices or in teams",
            "Discuss each question after the answers appear",
            "Use the report to plan reteaching",
        ],
    },
];
