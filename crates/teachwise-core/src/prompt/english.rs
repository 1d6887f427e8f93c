//! English template catalog.

use super::catalog::{BandPhrases, Catalog, DirectiveSet, Labels, StylePhrases};

pub(crate) static CATALOG: Catalog = Catalog {
    preamble: None,
    question: QUESTION,
    scenario: SCENARIO,
    persona_profile: PERSONA_PROFILE,
    student_turn: STUDENT_TURN,
    persona_guidance: PERSONA_GUIDANCE,
    evaluation: EVALUATION,
    directives: DirectiveSet {
        confidence: BandPhrases {
            low: "Be hesitant, use 'maybe', 'I think', ask for validation",
            moderate: "Show moderate confidence",
            high: "Be assertive and state opinions clearly",
        },
        persistence: BandPhrases {
            low: "Give up quickly, say 'I don't know' often",
            moderate: "Show average persistence",
            high: "Keep trying, ask follow-up questions",
        },
        metacognition: BandPhrases {
            low: "Don't recognize mistakes or confusion",
            moderate: "Show some self-awareness",
            high: "Explicitly state confusion: 'I'm confused about...', 'I think I understand but...'",
        },
        style: StylePhrases {
            verbal: "Prefer verbal explanations, ask for definitions",
            visual: "Ask for diagrams/pictures, describe spatial relationships",
            hands_on: "Want to try things, mention physical examples",
        },
    },
    labels: Labels {
        teacher: "Teacher",
        student: "Student",
        yes: "YES",
        no: "NO",
        strategy: "Selected Teaching Strategy: {{strategy}}",
        no_strategy: "No specific strategy selected",
        empty_history: "(no messages yet)",
        fallback_name: "a student",
        fallback_performance: "average",
        fallback_topic: "this subject",
        fallback_difficulty: "intermediate",
    },
};

const QUESTION: &str = r#"Generate a high-quality practice question for a {{grade_level}} {{subject}} class.

Learning Outcomes: {{learning_outcomes}}
Key Concepts: {{concepts}}

Create a question that:
1. Is open-ended and encourages student thinking
2. Allows for multiple approaches or explanations
3. Can reveal common misconceptions about the concepts
4. Is age-appropriate for {{grade_level}} level
5. Connects to the specified learning outcomes

The question should be designed to help teachers diagnose student understanding and identify misconceptions.

Return response in this JSON format:
{
    "question": "the practice question",
    "rationale": "why this question is effective for revealing misconceptions",
    "expectedMisconceptions": ["common misconception 1", "common misconception 2", "common misconception 3"]
}

Return ONLY valid JSON, no other text or markdown formatting."#;

const PERSONA_PROFILE: &str = r#"Student Characteristics:
- Conceptual Readiness: {{conceptual_readiness}}/10 (prior knowledge strength)
- Metacognitive Awareness: {{metacognitive_awareness}}/10 (ability to recognize own understanding/confusion)
- Persistence: {{persistence}}/10 (willingness to work through difficulty)
- Communication Style: {{communication_style}} (prefers {{communication_style}} explanations)
- Confidence Level: {{confidence_level}}/10 (willingness to share thinking and ask questions)

Behavioral Guidelines:
- If confidence is low (1-3): Student is hesitant, asks for validation, says "I think maybe..."
- If confidence is high (8-10): Student is assertive, states opinions confidently
- If persistence is low (1-3): Student gives up quickly, says "I don't know" often
- If persistence is high (8-10): Student keeps trying, asks follow-up questions
- If metacognitive awareness is low (1-3): Student doesn't recognize their mistakes or confusion
- If metacognitive awareness is high (8-10): Student says things like "I'm confused about..." or "I think I understand but..."
- If communication style is "visual": Student asks for pictures/diagrams, describes spatial relationships
- If communication style is "hands_on": Student wants to try things, mentions physical examples
- If communication style is "verbal": Student prefers explanations, asks for definitions"#;

const SCENARIO: &str = r#"Create a realistic teaching scenario for a {{grade_level}} {{subject}} class.

Learning Outcomes: {{learning_outcomes}}
Key Concepts: {{concepts}}
Practice Question: {{question}}

{{persona_profile}}

Generate a student who will respond to this specific question with a realistic misconception.
The student should have a clear, logical (but incorrect) understanding that leads to their wrong answer.

Generate a response in this JSON format:
{
    "student": {
        "name": "realistic first name",
        "background": "brief background that reflects the student's persona characteristics",
        "performanceLevel": "struggling/average/advanced",
        "actualMisconception": "the specific misconception this student has about the concepts",
        "initialResponse": "how the student responds to the practice question - should show their misconception and persona traits"
    },
    "misconceptionOptions": [
        "The correct misconception (this student's actual issue)",
        "Plausible but incorrect misconception 1",
        "Plausible but incorrect misconception 2",
        "Plausible but incorrect misconception 3"
    ],
    "correctMisconceptionIndex": 0,
    "topic": "specific topic being discussed",
    "difficulty": "beginner/intermediate/advanced",
    "persona": {
        "conceptual_readiness": {{conceptual_readiness}},
        "metacognitive_awareness": {{metacognitive_awareness}},
        "persistence": {{persistence}},
        "communication_style": "{{communication_style}}",
        "confidence_level": {{confidence_level}}
    },
    "practiceQuestion": {{question_json}}
}

Make sure the student's initial response directly addresses the practice question and reveals their misconception.
The response should also clearly reflect their persona characteristics.

Return ONLY valid JSON, no other text or markdown formatting."#;

const PERSONA_GUIDANCE: &str = r#"PERSONA CHARACTERISTICS TO MAINTAIN:
- Conceptual Readiness: {{conceptual_readiness}}/10
- Metacognitive Awareness: {{metacognitive_awareness}}/10
- Persistence: {{persistence}}/10
- Communication Style: {{communication_style}}
- Confidence Level: {{confidence_level}}/10

BEHAVIORAL CONSISTENCY:
- Confidence {{confidence_level}}/10: {{confidence_directive}}
- Persistence {{persistence}}/10: {{persistence_directive}}
- Metacognitive {{metacognitive_awareness}}/10: {{metacognition_directive}}
- Communication: {{style_directive}}"#;

const STUDENT_TURN: &str = r#"You are roleplaying as {{name}} who is {{performance_level}} in {{topic}}.

Your Background: {{background}}
Your Specific Misconception: {{misconception}}
Original Practice Question: {{practice_question}}

{{persona_guidance}}

Recent conversation:
{{conversation}}

The teacher just asked: "{{teacher_message}}"

IMPORTANT RESPONSE GUIDELINES:
1. Your responses should be REASONED and logical from your perspective
2. Show your thinking process - explain WHY you think something is correct
3. Your misconception should lead to consistent, logical (but wrong) reasoning
4. Don't just give random wrong answers - give answers that make sense given your misconception
5. Stay true to your persona characteristics throughout
6. If the teacher asks you to explain, show your reasoning step by step
7. If asked about the original question, refer back to your misconception-based understanding

Respond as this student would, showing both your misconception-based reasoning AND your persona traits.
Keep responses conversational and age-appropriate for {{difficulty}} level.

Return ONLY the student's response, no other text or formatting."#;

const EVALUATION: &str = r#"Evaluate this teaching session:

Student's Actual Misconception: {{actual_misconception}}
Teacher's Diagnosis: {{teacher_diagnosis}}
Correct Diagnosis: {{correct_label}}

Teacher's Intervention: {{intervention}}
{{strategy_line}}
Questions Asked by Teacher: {{teacher_question_count}}

Chat History:
{{chat_history}}

Provide evaluation in this JSON format:
{
    "correctDiagnosis": {{correct_diagnosis}},
    "score": 85,
    "questioningScore": 8,
    "correctMisconception": "the student's actual misconception",
    "feedback": "detailed feedback on the teacher's performance, including question quality, diagnostic accuracy, and intervention effectiveness",
    "improvements": ["specific suggestion 1", "specific suggestion 2", "specific suggestion 3"]
}

Score the session 0-100 based on:
- Diagnostic accuracy (35 points)
- Quality of questioning (30 points)
- Intervention effectiveness (25 points)
- Use of teaching strategies (10 points)

Questioning score (1-10) based on:
- Probing questions that reveal student thinking
- Progression from general to specific
- Avoiding leading questions
- Encouraging student reasoning

Consider the teaching strategy used (if any) in your evaluation.

Return ONLY valid JSON, no other text or markdown formatting."#;
