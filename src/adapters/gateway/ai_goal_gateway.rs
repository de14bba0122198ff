//! AI-backed GoalGateway implementation.
//!
//! Builds the advisor prompts from the check-in, asks the provider for JSON
//! that matches a fixed schema, and converts the answer into domain types.
//! Every failure is logged with its cause and then reduced to the
//! user-facing [`GenerationError`] for the operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::check_in::LifeAreaRating;
use crate::domain::foundation::ValidationError;
use crate::domain::goal::{
    Breakdown, CommonObstacle, Difficulty, GoalSuggestion, Milestone, SuggestionSet, Task,
};
use crate::domain::planning::GenerationError;
use crate::ports::{AIError, AIProvider, CompletionRequest, GoalGateway};

/// Why a gateway call failed. Only ever logged.
#[derive(Debug, thiserror::Error)]
enum GatewayFailure {
    #[error("provider call failed: {0}")]
    Provider(#[from] AIError),

    #[error("response is not valid JSON for the schema: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response content rejected: {0}")]
    Rejected(#[from] ValidationError),
}

/// GoalGateway that asks an LLM for structured output.
pub struct AiGoalGateway {
    ai_provider: Arc<dyn AIProvider>,
}

impl AiGoalGateway {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    async fn suggestions(&self, ratings: &[LifeAreaRating]) -> Result<SuggestionSet, GatewayFailure> {
        let request = CompletionRequest::new("goal_suggestions", suggestions_prompt(ratings))
            .with_response_schema(suggestions_schema());
        let response = self.ai_provider.complete(request).await?;

        let wire: SuggestionsWire = serde_json::from_str(&response.content)?;
        let goals = wire
            .goals
            .into_iter()
            .map(GoalWire::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SuggestionSet::new(goals, wire.contextual_note))
    }

    async fn breakdown(
        &self,
        goal: &GoalSuggestion,
        ratings: &[LifeAreaRating],
    ) -> Result<Breakdown, GatewayFailure> {
        let prompt = breakdown_prompt(goal, ratings)?;
        let request = CompletionRequest::new("goal_breakdown", prompt)
            .with_response_schema(breakdown_schema());
        let response = self.ai_provider.complete(request).await?;

        let wire: BreakdownWire = serde_json::from_str(&response.content)?;
        Ok(wire.into_domain())
    }
}

#[async_trait]
impl GoalGateway for AiGoalGateway {
    async fn request_suggestions(
        &self,
        ratings: &[LifeAreaRating],
    ) -> Result<SuggestionSet, GenerationError> {
        self.suggestions(ratings).await.map_err(|cause| {
            tracing::error!(error = %cause, rated_areas = ratings.len(), "Error generating goal suggestions");
            GenerationError::suggestions()
        })
    }

    async fn request_breakdown(
        &self,
        goal: &GoalSuggestion,
        ratings: &[LifeAreaRating],
    ) -> Result<Breakdown, GenerationError> {
        self.breakdown(goal, ratings).await.map_err(|cause| {
            tracing::error!(error = %cause, goal_id = %goal.id, "Error generating detailed breakdown");
            GenerationError::breakdown()
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Prompts
// ════════════════════════════════════════════════════════════════════════════════

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

fn suggestions_prompt(ratings: &[LifeAreaRating]) -> String {
    let situation = ratings
        .iter()
        .map(|r| {
            format!(
                "{}: {}\nWhat's working: {}\nChallenges: {}\nBetter would be: {}\nNotes: {}\n",
                r.life_area,
                r.rating,
                or_placeholder(&r.whats_working, "Not specified"),
                or_placeholder(&r.challenges, "Not specified"),
                or_placeholder(&r.better_looks_like, "Not specified"),
                or_placeholder(&r.additional_notes, "None"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert goal advisor specializing in neurodivergent-friendly planning. You help people who struggle with executive function, planning, and overwhelm.

USER'S CURRENT LIFE SITUATION:

{situation}
YOUR TASK:

Generate 5-7 personalized goal suggestions that would meaningfully improve this person's life. Focus on areas they rated lowest (1-2), but include 1-2 goals for neutral areas (3) if relevant. For each goal provide: title, rationale, life areas impacted, realistic timeframe in weeks, difficulty assessment, and 3-4 specific, observable success indicators.

CRITICAL GUIDELINES:
- Start where they are: For low-rated areas, suggest foundational goals.
- Be specific: Goals must be clear and measurable.
- Consider neurodivergence: Account for executive dysfunction, sensory sensitivities, and energy variability.
- No toxic positivity: Be realistic and compassionate.
- Address root causes.

Return the response in JSON format that adheres to the provided schema."#
    )
}

/// Check-in entry as shown to the model in the breakdown prompt.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RatingContext<'a> {
    life_area: &'a str,
    rating: u8,
    whats_working: &'a str,
    challenges: &'a str,
    better_looks_like: &'a str,
    additional_notes: &'a str,
}

impl<'a> From<&'a LifeAreaRating> for RatingContext<'a> {
    fn from(r: &'a LifeAreaRating) -> Self {
        Self {
            life_area: r.life_area.display_name(),
            rating: r.rating.value(),
            whats_working: &r.whats_working,
            challenges: &r.challenges,
            better_looks_like: &r.better_looks_like,
            additional_notes: &r.additional_notes,
        }
    }
}

fn breakdown_prompt(goal: &GoalSuggestion, ratings: &[LifeAreaRating]) -> Result<String, GatewayFailure> {
    let context: Vec<RatingContext<'_>> = ratings.iter().map(RatingContext::from).collect();
    let context = serde_json::to_string_pretty(&context)?;

    Ok(format!(
        r#"You are a neurodivergent-friendly goal planning expert. Your specialty is breaking down goals into EXTREMELY DETAILED, step-by-step instructions that leave nothing to guesswork.

GOAL TO BREAK DOWN:
"{title}"

USER'S TIMEFRAME: {weeks} weeks

USER'S CONTEXT:
{context}

YOUR TASK:

Create a comprehensive, detailed breakdown with 4-6 milestones. Each milestone should have 3-6 specific tasks.

CRITICAL REQUIREMENTS FOR EACH TASK:
1.  **description**: A brief, clear title for the task.
2.  **detailedSteps**: An array of exact, granular action steps. Not "research gyms" but "1. Open Google Maps, 2. search 'gyms near me', 3. make a list of 3 options with their hours and prices".
3.  **estimatedTime**: Realistic time estimate (e.g., "5 minutes", "30 minutes").
4.  **whenToDo**: Suggested timing (e.g., "Morning before work", "Weekend when you have energy").
5.  **whatYouNeed**: A list of materials, apps, or info needed.
6.  **successLooksLike**: Concrete, observable completion criteria.
7.  **commonObstacles**: An array of objects, each with a potential "obstacle" and a practical "solution".
8.  **nextStepConnection**: How this task leads to the next one.
9.  **order**: The numerical order of the task within the milestone.
10. **celebrationNote**: An optional encouraging message upon completion.

MILESTONE STRUCTURE:
- Each milestone must have a title, duration estimate, rationale (whyThisMilestone), and completion criteria.

IMPORTANT CONSIDERATIONS:
- Executive function support: Break tasks into the smallest possible actions.
- Decision fatigue: Minimize choices within tasks.
- Time blindness: Always include time estimates.
- Energy management: Suggest timing based on typical energy patterns.
- Flexibility: Include alternatives for low-energy days.

Return the response in JSON format that adheres to the provided schema."#,
        title = goal.title,
        weeks = goal.timeframe_weeks,
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Response schemas (Gemini dialect)
// ════════════════════════════════════════════════════════════════════════════════

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

fn suggestions_schema() -> Value {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "goals": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "rationale": { "type": "STRING" },
                        "lifeAreasImpacted": string_array(),
                        "timeframeWeeks": { "type": "INTEGER" },
                        "difficulty": { "type": "STRING", "enum": difficulties },
                        "successIndicators": string_array(),
                    },
                    "required": [
                        "title", "rationale", "lifeAreasImpacted",
                        "timeframeWeeks", "difficulty", "successIndicators"
                    ],
                },
            },
            "contextualNote": { "type": "STRING" },
        },
        "required": ["goals", "contextualNote"],
    })
}

fn breakdown_schema() -> Value {
    let task = json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "detailedSteps": string_array(),
            "estimatedTime": { "type": "STRING" },
            "whenToDo": { "type": "STRING" },
            "whatYouNeed": string_array(),
            "successLooksLike": { "type": "STRING" },
            "commonObstacles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "obstacle": { "type": "STRING" },
                        "solution": { "type": "STRING" },
                    },
                    "required": ["obstacle", "solution"],
                },
            },
            "nextStepConnection": { "type": "STRING" },
            "celebrationNote": { "type": "STRING" },
            "order": { "type": "INTEGER" },
        },
        "required": [
            "description", "detailedSteps", "estimatedTime", "whenToDo", "whatYouNeed",
            "successLooksLike", "commonObstacles", "nextStepConnection", "order"
        ],
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "milestones": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "durationWeeks": { "type": "NUMBER" },
                        "whyThisMilestone": { "type": "STRING" },
                        "completionCriteria": { "type": "STRING" },
                        "order": { "type": "INTEGER" },
                        "tasks": { "type": "ARRAY", "items": task },
                    },
                    "required": [
                        "title", "durationWeeks", "whyThisMilestone",
                        "completionCriteria", "order", "tasks"
                    ],
                },
            },
            "overallApproach": { "type": "STRING" },
            "flexibilityNote": { "type": "STRING" },
        },
        "required": ["milestones", "overallApproach", "flexibilityNote"],
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionsWire {
    goals: Vec<GoalWire>,
    contextual_note: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalWire {
    title: String,
    rationale: String,
    life_areas_impacted: Vec<String>,
    timeframe_weeks: u32,
    difficulty: String,
    success_indicators: Vec<String>,
}

impl GoalWire {
    fn into_domain(self) -> Result<GoalSuggestion, ValidationError> {
        let difficulty: Difficulty = self.difficulty.parse()?;
        Ok(
            GoalSuggestion::new(self.title, self.rationale, self.timeframe_weeks, difficulty)
                .with_life_areas(self.life_areas_impacted)
                .with_success_indicators(self.success_indicators),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownWire {
    milestones: Vec<MilestoneWire>,
    overall_approach: String,
    flexibility_note: String,
}

impl BreakdownWire {
    fn into_domain(self) -> Breakdown {
        let milestones = self.milestones.into_iter().map(MilestoneWire::into_domain).collect();
        Breakdown::new(milestones, self.overall_approach, self.flexibility_note)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MilestoneWire {
    title: String,
    duration_weeks: f64,
    why_this_milestone: String,
    completion_criteria: String,
    order: i64,
    tasks: Vec<TaskWire>,
}

impl MilestoneWire {
    fn into_domain(self) -> Milestone {
        let tasks = self.tasks.into_iter().map(TaskWire::into_domain).collect();
        Milestone {
            duration_weeks: self.duration_weeks,
            why_this_milestone: self.why_this_milestone,
            completion_criteria: self.completion_criteria,
            ..Milestone::new(self.title, self.order, tasks)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskWire {
    description: String,
    detailed_steps: Vec<String>,
    estimated_time: String,
    when_to_do: String,
    what_you_need: Vec<String>,
    success_looks_like: String,
    common_obstacles: Vec<CommonObstacle>,
    next_step_connection: String,
    #[serde(default)]
    celebration_note: Option<String>,
    order: i64,
}

impl TaskWire {
    fn into_domain(self) -> Task {
        Task {
            detailed_steps: self.detailed_steps,
            estimated_time: self.estimated_time,
            when_to_do: self.when_to_do,
            what_you_need: self.what_you_need,
            success_looks_like: self.success_looks_like,
            common_obstacles: self.common_obstacles,
            next_step_connection: self.next_step_connection,
            celebration_note: self.celebration_note.filter(|n| !n.trim().is_empty()),
            ..Task::new(self.description, self.order)
        }
    }
}
