//! Traditional Chinese template catalog.
//!
//! JSON keys in the response skeletons stay in English so replies parse into
//! the same records as the English catalog.

use super::catalog::{BandPhrases, Catalog, DirectiveSet, Labels, StylePhrases};

pub(crate) static CATALOG: Catalog = Catalog {
    preamble: Some(PREAMBLE),
    question: QUESTION,
    scenario: SCENARIO,
    persona_profile: PERSONA_PROFILE,
    student_turn: STUDENT_TURN,
    persona_guidance: PERSONA_GUIDANCE,
    evaluation: EVALUATION,
    directives: DirectiveSet {
        confidence: BandPhrases {
            low: "表現猶豫，常用「可能」、「我覺得」，並向老師尋求確認",
            moderate: "表現出中等程度的自信",
            high: "態度果斷，清楚地表達自己的看法",
        },
        persistence: BandPhrases {
            low: "很快就放棄，經常說「我不知道」",
            moderate: "表現出一般的毅力",
            high: "持續嘗試，會主動追問後續問題",
        },
        metacognition: BandPhrases {
            low: "察覺不到自己的錯誤或困惑",
            moderate: "表現出一些自我覺察",
            high: "明確說出自己的困惑：「我對……感到困惑」、「我好像懂了，但是……」",
        },
        style: StylePhrases {
            verbal: "偏好口頭解釋，會要求老師給出定義",
            visual: "要求看圖表或圖片，會描述空間關係",
            hands_on: "想要動手試試看，會提到具體的實物例子",
        },
    },
    labels: Labels {
        teacher: "老師",
        student: "學生",
        yes: "是",
        no: "否",
        strategy: "選擇的教學策略：{{strategy}}",
        no_strategy: "未選擇特定的教學策略",
        empty_history: "（尚無對話）",
        fallback_name: "一位學生",
        fallback_performance: "程度中等",
        fallback_topic: "這個科目",
        fallback_difficulty: "中等",
    },
};

const PREAMBLE: &str = r#"語言要求 (LANGUAGE REQUIREMENT):
- 請全程使用繁體中文撰寫所有回覆內容，不要使用簡體中文。
- 若要求回傳 JSON，所有欄位名稱（鍵）必須與範例完全相同並保留英文，只有欄位的值使用繁體中文。
- Respond entirely in Traditional Chinese. Keep every JSON key exactly as shown in English; only the values are written in Traditional Chinese."#;

const QUESTION: &str = r#"請為{{grade_level}}的{{subject}}課程設計一道高品質的練習題。

學習目標：{{learning_outcomes}}
核心概念：{{concepts}}

這道題目應該：
1. 是開放式問題，能引發學生思考
2. 允許多種解題方法或解釋方式
3. 能揭露學生對這些概念常見的迷思概念
4. 適合{{grade_level}}學生的程度
5. 與指定的學習目標相連結

這道題目的目的是協助老師診斷學生的理解程度並找出迷思概念。

請以以下 JSON 格式回覆：
{
    "question": "練習題內容",
    "rationale": "說明這道題目為何能有效揭露迷思概念",
    "expectedMisconceptions": ["常見迷思概念一", "常見迷思概念二", "常見迷思概念三"]
}

只回傳有效的 JSON，不要包含任何其他文字或 markdown 格式。"#;

const PERSONA_PROFILE: &str = r#"學生特質：
- 概念準備度：{{conceptual_readiness}}/10（先備知識的扎實程度）
- 後設認知覺察：{{metacognitive_awareness}}/10（察覺自己理解或困惑的能力）
- 毅力：{{persistence}}/10（面對困難時繼續努力的意願）
- 溝通風格：{{communication_style}}（偏好 {{communication_style}} 方式的說明）
- 自信程度：{{confidence_level}}/10（分享想法與提問的意願）

行為準則：
- 自信低（1-3）：學生表現猶豫，會尋求確認，常說「我覺得可能……」
- 自信高（8-10）：學生態度果斷，自信地表達意見
- 毅力低（1-3）：學生很快就放棄，經常說「我不知道」
- 毅力高（8-10）：學生會持續嘗試，並追問後續問題
- 後設認知低（1-3）：學生察覺不到自己的錯誤或困惑
- 後設認知高（8-10）：學生會說「我對……感到困惑」或「我好像懂了，但是……」
- 溝通風格為 "visual"：學生會要求看圖片或圖表，描述空間關係
- 溝通風格為 "hands_on"：學生想要動手嘗試，會提到具體的實物例子
- 溝通風格為 "verbal"：學生偏好口頭解釋，會要求定義"#;

const SCENARIO: &str = r#"請為{{grade_level}}的{{subject}}課程建立一個真實的教學情境。

學習目標：{{learning_outcomes}}
核心概念：{{concepts}}
練習題：{{question}}

{{persona_profile}}

請設計一位學生，他會針對這道練習題給出帶有真實迷思概念的回答。
這位學生對概念有清楚、合乎邏輯（但錯誤）的理解，並因此得出錯誤答案。

請以以下 JSON 格式回覆：
{
    "student": {
        "name": "真實的名字",
        "background": "反映學生特質的簡短背景",
        "performanceLevel": "struggling/average/advanced",
        "actualMisconception": "這位學生對這些概念的具體迷思概念",
        "initialResponse": "學生對練習題的回答，需呈現其迷思概念與個人特質"
    },
    "misconceptionOptions": [
        "正確的迷思概念（這位學生真正的問題）",
        "看似合理但不正確的迷思概念一",
        "看似合理但不正確的迷思概念二",
        "看似合理但不正確的迷思概念三"
    ],
    "correctMisconceptionIndex": 0,
    "topic": "討論的具體主題",
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

請確保學生的初始回答直接回應練習題，並揭露其迷思概念。
回答也必須清楚反映學生的個人特質。

只回傳有效的 JSON，不要包含任何其他文字或 markdown 格式。"#;

const PERSONA_GUIDANCE: &str = r#"需要維持的學生特質：
- 概念準備度：{{conceptual_readiness}}/10
- 後設認知覺察：{{metacognitive_awareness}}/10
- 毅力：{{persistence}}/10
- 溝通風格：{{communication_style}}
- 自信程度：{{confidence_level}}/10

行為一致性：
- 自信 {{confidence_level}}/10：{{confidence_directive}}
- 毅力 {{persistence}}/10：{{persistence_directive}}
- 後設認知 {{metacognitive_awareness}}/10：{{metacognition_directive}}
- 溝通方式：{{style_directive}}"#;

const STUDENT_TURN: &str = r#"你正在扮演{{name}}，在「{{topic}}」方面的表現屬於{{performance_level}}。

你的背景：{{background}}
你的具體迷思概念：{{misconception}}
原始練習題：{{practice_question}}

{{persona_guidance}}

最近的對話：
{{conversation}}

老師剛剛問：「{{teacher_message}}」

重要的回答準則：
1. 你的回答必須從你的角度看來是有道理、合乎邏輯的
2. 展現你的思考過程，說明你為什麼認為某件事是正確的
3. 你的迷思概念應該導致一致且合乎邏輯（但錯誤）的推理
4. 不要隨便給錯誤答案，而是給出在你的迷思概念下說得通的答案
5. 始終維持你的個人特質
6. 如果老師要求你解釋，請一步一步說明你的推理
7. 如果被問到原始題目，請回到你基於迷思概念的理解

請以這位學生的身分回答，同時展現基於迷思概念的推理與個人特質。
回答要口語化，並適合{{difficulty}}程度的學生。

只回傳學生的回答，不要包含任何其他文字或格式。"#;

const EVALUATION: &str = r#"請評估這次教學過程：

學生真正的迷思概念：{{actual_misconception}}
老師的診斷：{{teacher_diagnosis}}
診斷是否正確：{{correct_label}}

老師的教學介入：{{intervention}}
{{strategy_line}}
老師提問次數：{{teacher_question_count}}

對話紀錄：
{{chat_history}}

請以以下 JSON 格式提供評估：
{
    "correctDiagnosis": {{correct_diagnosis}},
    "score": 85,
    "questioningScore": 8,
    "correctMisconception": "學生真正的迷思概念",
    "feedback": "針對老師表現的詳細回饋，包含提問品質、診斷準確度與介入成效",
    "improvements": ["具體建議一", "具體建議二", "具體建議三"]
}

依照以下標準給予 0-100 的總分：
- 診斷準確度（35 分）
- 提問品質（30 分）
- 介入成效（25 分）
- 教學策略的運用（10 分）

提問分數（1-10）依據：
- 能揭露學生想法的探究式提問
- 由廣泛到具體的提問順序
- 避免引導式提問
- 鼓勵學生推理

評估時請考量老師所使用的教學策略（如果有的話）。

只回傳有效的 JSON，不要包含任何其他文字或 markdown 格式。"#;
