// All LLM prompt templates for interview Q&A generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Instruction segment.
/// Replace: {num_questions}, {role_level}, {interview_type},
///          {no_hallucination_instruction}, {json_only_instruction}
pub const QA_INSTRUCTION_TEMPLATE: &str = r#"You are an expert interview preparation assistant. Your goal is to help a candidate prepare for a job interview by generating tailored questions and answers based on their resume and the job description.

  Analyze the provided Job Description and Resume.
  Produce a structured JSON response containing:
  1. A concise "Role Summary" (what the company is looking for).
  2. A "Candidate Summary" (how the candidate fits).
  3. A "Tell me about yourself" section with two versions:
     - longAnswer: ~2 minutes spoken, detailed.
     - shortAnswer: ~45 seconds spoken, elevator pitch.
  4. Exactly {num_questions} interview questions divided into logical sections (e.g., General, Technical, Experience, etc.).
     - For each question, provide a high-quality, spoken-English answer that highlights the candidate's strengths from their resume.
     - Add relevant tags to each question.
  5. A list of 3-5 "Questions to ask the interviewer".

  Target Role Level: {role_level}
  Interview Type: {interview_type}

  IMPORTANT:
{no_hallucination_instruction}
  - Use professional but natural spoken English.
{json_only_instruction}
  - Ensure the "tellMeAboutYourself" object is present with "longAnswer" and "shortAnswer" keys.

  Example JSON Structure:
  {
    "roleSummary": "...",
    "candidateSummary": "...",
    "tellMeAboutYourself": {
      "question": "Tell me about yourself",
      "longAnswer": "...",
      "shortAnswer": "..."
    },
    "sections": [
      {
        "title": "General",
        "description": "...",
        "items": [
          { "question": "...", "answer": "...", "tags": ["..."] }
        ]
      }
    ],
    "suggestionsForInterviewerQuestions": ["..."]
  }
"#;

/// Heading of the job description block in the content segment.
pub const JOB_DESCRIPTION_HEADING: &str = "JOB DESCRIPTION:";

/// Heading of the resume block in the content segment.
pub const RESUME_HEADING: &str = "RESUME:";
