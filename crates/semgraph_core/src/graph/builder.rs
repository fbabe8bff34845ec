//! The Semantic Graph Builder orchestrator: wires every component together
//! into the fixed 13-step build sequence.

use crate::arc_corrector::correct_ditransitive_arcs;
use crate::budget::{Budget, BudgetTracker};
use crate::clause;
use crate::confidence::{self, AmbiguitySignal, ArcConfidence};
use crate::dep_tree::DepTree;
use crate::error::{PipelineError, STAGE_PARSE};
use crate::extract::act::Actuality;
use crate::extract::{extract_acts, extract_entities, map_roles, Act, Entity, Role};
use crate::graph::model::{clean_text_segment, mint_iri, Node, PropertyValue};
use crate::mode;
use crate::models::{Calibration, DepModel, PosModel};
use crate::ner;
use crate::ner::DesignatorSpan;
use crate::normalize::normalize;
use crate::parser::parse;
use crate::selectional::{check_acts, AnchoredViolation};
use crate::tagger::tag;
use crate::token::{PosTag, Token};
use crate::tokenizer::tokenize;
use semgraph_base::Interner;
use semgraph_lexicon::{classify_denoted_type, DomainConfig, Gazetteer};
use std::collections::HashSet;

/// Adjectives flagging scarcity on the noun they modify. Under-specified by
/// the option surface beyond its name and default; kept as a small, local
/// list rather than growing the shared lexicon for a single weak signal.
const SCARCITY_ADJECTIVES: &[&str] = &["scarce", "limited", "insufficient", "short", "dwindling"];

/// The pipeline's fixed library version, pinned onto every minted
/// `ParserAgent` node so a graph records which build produced it.
pub const PIPELINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Option surface controlling which components run and how aggressively.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub extract_entities: bool,
    pub extract_acts: bool,
    pub detect_roles: bool,
    pub extract_scarcity: bool,
    pub extract_qualities: bool,
    pub extract_directives: bool,
    pub create_aggregates: bool,
    pub greedy_ner: bool,
    pub enable_traffic_cop: bool,
    pub detect_ambiguity: bool,
    pub preserve_ambiguity: bool,
    pub preserve_threshold: f64,
    pub max_alternatives: usize,
    pub use_tree_extractors: bool,
    pub verbose: bool,
    pub namespace: String,
    pub context: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            extract_entities: true,
            extract_acts: true,
            detect_roles: true,
            extract_scarcity: true,
            extract_qualities: true,
            extract_directives: true,
            create_aggregates: true,
            greedy_ner: false,
            enable_traffic_cop: true,
            detect_ambiguity: false,
            preserve_ambiguity: false,
            preserve_threshold: 0.7,
            max_alternatives: 3,
            use_tree_extractors: false,
            verbose: false,
            namespace: "inst".to_string(),
            context: None,
        }
    }
}

/// Per-build summary data returned alongside the graph.
#[derive(Debug, Clone)]
pub struct BuildMetadata {
    pub input_length: usize,
    pub node_count: usize,
    pub version: String,
    pub context_iri: Option<String>,
    pub ibe_iri: String,
    pub parser_agent_iri: String,
    pub truncated: bool,
    pub rejected: Option<String>,
}

/// One surfaced ambiguity signal: either a selectional-preference mismatch
/// or a low-confidence arc attachment that could plausibly have landed on
/// the alternative PP-attach label instead.
#[derive(Debug, Clone)]
pub enum AmbiguityFinding {
    Selectional(AnchoredViolation),
    ArcAttachment(AmbiguitySignal),
}

/// The full return value of a build: the graph itself, its metadata, and
/// (when `detect_ambiguity` is set) the ambiguity findings surfaced.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub graph: Vec<Node>,
    pub metadata: BuildMetadata,
    pub ambiguity_report: Vec<AmbiguityFinding>,
}

/// Owns the loaded, read-only-after-load models a build reads: POS and
/// dependency weights, an optional calibration table, a gazetteer, and a
/// domain config overlay registry. Shareable across builds; nothing here
/// is mutated once built except via explicit `load_*` calls between builds.
pub struct GraphBuilder {
    pos_model: PosModel,
    dep_model: DepModel,
    calibration: Option<Calibration>,
    gazetteer: Gazetteer,
    domain_config: DomainConfig,
    budget: Budget,
}

impl GraphBuilder {
    pub fn new(pos_model: PosModel, dep_model: DepModel) -> Self {
        GraphBuilder {
            pos_model,
            dep_model,
            calibration: None,
            gazetteer: Gazetteer::new(),
            domain_config: DomainConfig::new(),
            budget: Budget::default(),
        }
    }

    /// Loads POS and dependency models from disk. The only I/O this crate
    /// performs outside explicit gazetteer/config/calibration loading.
    pub fn from_paths(pos_model_path: &str, dep_model_path: &str) -> Result<Self, PipelineError> {
        let pos_json = std::fs::read_to_string(pos_model_path)
            .map_err(|e| PipelineError::ModelMissing { model: format!("{}: {}", pos_model_path, e) })?;
        let dep_json = std::fs::read_to_string(dep_model_path)
            .map_err(|e| PipelineError::ModelMissing { model: format!("{}: {}", dep_model_path, e) })?;
        let pos_model = PosModel::from_json(&pos_json).map_err(|e| PipelineError::stage(STAGE_PARSE, e.to_string()))?;
        let dep_model = DepModel::from_json(&dep_json).map_err(|e| PipelineError::stage(STAGE_PARSE, e.to_string()))?;
        Ok(Self::new(pos_model, dep_model))
    }

    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    pub fn with_domain_config(mut self, domain_config: DomainConfig) -> Self {
        self.domain_config = domain_config;
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn domain_config_mut(&mut self) -> &mut DomainConfig {
        &mut self.domain_config
    }

    /// Runs the fixed 13-step build sequence over `text`.
    pub fn build(&self, text: &str, options: &BuildOptions) -> Result<BuildResult, PipelineError> {
        let mut tracker = BudgetTracker::new(self.budget);

        if text.trim().is_empty() {
            return Ok(empty_result("input is empty"));
        }
        if let Some(overrun) = tracker.check_input_len(text.len()) {
            if tracker.throw_on_exceed() {
                return Err(overrun.into());
            }
            return Ok(truncated_result(text.len(), format!("input exceeds {}", overrun.limit)));
        }

        let mut interner = Interner::new();
        let normalized = normalize(text);
        let raw_tokens = tokenize(&normalized, &mut interner);
        let tokens = tag(&raw_tokens, &self.pos_model, &mut interner);
        let mut arcs = parse(&tokens, &self.dep_model, &interner);
        correct_ditransitive_arcs(&mut arcs, &tokens, &interner);
        let tree = DepTree::new(arcs.clone());

        // Step 1: sentence-mode classification; high object complexity
        // auto-enables greedy NER regardless of the caller's setting.
        let mut greedy_ner = options.greedy_ner;
        let sentence_mode = if options.enable_traffic_cop {
            let mode = mode::classify_sentence(&tokens, &tree, &arcs, &interner);
            if let Some(tail) = verb_object_tail(&tokens, &arcs) {
                if mode::object_complexity_triggers_greedy_ner(&tail, &interner) {
                    greedy_ner = true;
                }
            }
            Some(mode)
        } else {
            None
        };

        // Step 2: clause segmentation (coordination only; per-clause
        // re-extraction with subject injection is a v2 extension).
        let segmentation = clause::segment(&tokens, &arcs, &interner);

        // Step 3: entities over the full token stream.
        let mut entities = if options.extract_entities {
            extract_entities(&tokens, &tree, &arcs, &interner, &self.gazetteer)
        } else {
            Vec::new()
        };

        // Step 4: Complex Designator detection and shadow suppression. Each
        // detected span both suppresses overlapping shadow entities and
        // mints its own ComplexDesignator node once the graph is assembled.
        let designators = if greedy_ner { ner::detect_designators(&tokens, &interner) } else { Vec::new() };
        if greedy_ner && !designators.is_empty() {
            entities = ner::suppress_shadowed(entities, &designators, |e| {
                tokens
                    .iter()
                    .find(|t| t.id == e.head_token_id)
                    .map(|t| t.span)
                    .unwrap_or(semgraph_base::Span::new(0, 0))
            });
        }

        let mut truncated_by_overrun = false;
        for _ in 0..entities.len() {
            if let Some(overrun) = tracker.record_referent() {
                if tracker.throw_on_exceed() {
                    return Err(overrun.into());
                }
                truncated_by_overrun = true;
            }
        }

        // Step 6: acts, skipping verbs that fall inside a suppressed
        // designator span.
        let suppressed_ids: Vec<usize> = designators.iter().flat_map(|d| d.token_ids.clone()).collect();
        let acts = if options.extract_acts {
            extract_acts(&tokens, &arcs, &interner, &suppressed_ids)
        } else {
            Vec::new()
        };
        for _ in 0..acts.len() {
            if let Some(overrun) = tracker.record_assertion() {
                if tracker.throw_on_exceed() {
                    return Err(overrun.into());
                }
                truncated_by_overrun = true;
            }
        }

        // Step 8: roles, respecting actuality (P6/P7).
        let roles = if options.detect_roles {
            map_roles(&acts, &entities, &tokens, &arcs, &interner)
        } else {
            Vec::new()
        };

        // Step 13: selectional violations and low-confidence arc attachments
        // both feed ambiguity detection; each act/entity node affected by
        // either gets a `hasAmbiguity`/`selectionalMismatch` flag below.
        let selectional_violations = if options.detect_ambiguity {
            check_acts(&acts, &entities, &roles, &interner)
        } else {
            Vec::new()
        };

        let arc_confidences: Vec<(Arc, ArcConfidence)> = match &self.calibration {
            Some(calibration) => arcs.iter().map(|a| (a.clone(), confidence::annotate_arc(a, calibration))).collect(),
            None => Vec::new(),
        };

        let mut ambiguity_report: Vec<AmbiguityFinding> =
            selectional_violations.iter().cloned().map(AmbiguityFinding::Selectional).collect();

        let selectional_mismatch_entities: HashSet<usize> =
            selectional_violations.iter().map(|v| v.entity_head_token_id).collect();
        let selectional_mismatch_acts: HashSet<usize> =
            selectional_violations.iter().map(|v| v.act_verb_token_id).collect();

        let mut ambiguous_token_ids: HashSet<usize> = HashSet::new();
        if options.detect_ambiguity {
            for (arc, conf) in &arc_confidences {
                if let Some(signal) = &conf.ambiguity_signal {
                    ambiguous_token_ids.insert(arc.dependent_id);
                    ambiguous_token_ids.insert(arc.head_id);
                    ambiguity_report.push(AmbiguityFinding::ArcAttachment(signal.clone()));
                }
            }
        }

        let mut graph = Vec::new();
        let namespace = options.namespace.as_str();

        // Step 10: IBE, ParserAgent, ParsingAct.
        let ibe_id = mint_iri(namespace, "IBE", "Input", &[&normalized]);
        let parser_agent_id = mint_iri(namespace, "ParserAgent", "Parser", &[PIPELINE_VERSION]);
        let mut ibe_node = Node::new(ibe_id.clone(), vec!["InformationBearingEntity".to_string()]);
        ibe_node.set("text", PropertyValue::Literal(normalized.clone()));
        graph.push(ibe_node);

        let mut parser_agent = Node::new(parser_agent_id.clone(), vec!["ParserAgent".to_string()]);
        parser_agent.set("version", PropertyValue::Literal(PIPELINE_VERSION.to_string()));
        graph.push(parser_agent);

        let arc_probabilities: Vec<(usize, f64)> =
            arc_confidences.iter().map(|(arc, conf)| (arc.dependent_id, conf.probability)).collect();

        // Step 3/17: each mention mints both a Tier-2 real-world entity and
        // a Tier-1 discourse referent pointing at it via `is_about` (I2/P4).
        let mut entity_iris = Vec::new();
        for entity in &entities {
            let tier2 = tier2_entity_node(namespace, entity, &tokens, &interner, &ibe_id, options.create_aggregates);
            let mut referent = tier1_referent_node(namespace, entity, &tokens, &arcs, &interner, &tier2.id);

            if !arc_probabilities.is_empty() {
                let conf = confidence::entity_confidence(&entity.span_token_ids, &arc_probabilities);
                referent.set("confidence", PropertyValue::Literal(format!("{:.3}", conf)));
            }

            if options.detect_ambiguity {
                if selectional_mismatch_entities.contains(&entity.head_token_id) {
                    referent.set("selectionalMismatch", PropertyValue::Flag(true));
                }
                if ambiguous_token_ids.contains(&entity.head_token_id) {
                    referent.set("hasAmbiguity", PropertyValue::Flag(true));
                }
            }

            // Step 11/extractScarcity: quality adjectives modifying this
            // entity's head become Quality nodes inhering in the Tier-2
            // entity, linked from the Tier-1 referent via `describes_quality`.
            if options.extract_qualities || options.extract_scarcity {
                let mut quality_iris = Vec::new();
                for adj in amod_children(entity.head_token_id, &arcs, &tokens) {
                    let adj_lemma = interner.resolve(adj.lemma).to_string();
                    if options.extract_qualities && classify_denoted_type(&adj_lemma) == Some("Quality") {
                        let quality_id =
                            mint_iri(namespace, "Quality", &clean_text_segment(&adj_lemma), &[&adj_lemma, &adj.id.to_string()]);
                        let mut quality_node = Node::new(quality_id.clone(), vec!["Quality".to_string()]);
                        quality_node.set("label", PropertyValue::Literal(adj_lemma.clone()));
                        quality_node.set("inheres_in", PropertyValue::Iri(tier2.id.clone()));
                        graph.push(quality_node);
                        quality_iris.push(quality_id);
                    }
                    if options.extract_scarcity && SCARCITY_ADJECTIVES.contains(&adj_lemma.as_str()) {
                        referent.set("scarce", PropertyValue::Flag(true));
                    }
                }
                if !quality_iris.is_empty() {
                    referent.set("describes_quality", PropertyValue::IriList(quality_iris));
                }
            }

            entity_iris.push(tier2.id.clone());
            graph.push(tier2);
            graph.push(referent);
        }

        // Step 4: mint a ComplexDesignator node per detected span.
        for designator in &designators {
            graph.push(designator_node(namespace, designator));
        }

        let mut act_iris = Vec::new();
        for act in &acts {
            let mut node = act_node(namespace, act);
            if options.detect_ambiguity {
                if selectional_mismatch_acts.contains(&act.verb_token_id) {
                    node.set("selectionalMismatch", PropertyValue::Flag(true));
                }
                if ambiguous_token_ids.contains(&act.verb_token_id) {
                    node.set("hasAmbiguity", PropertyValue::Flag(true));
                }
            }
            act_iris.push(node.id.clone());
            graph.push(node);

            if options.extract_directives {
                if let Some(directive) = directive_node(namespace, act, &node_id_for_act(namespace, act)) {
                    graph.push(directive);
                }
            }
        }

        if options.detect_roles {
            for role in &roles {
                graph.push(role_node(namespace, role, &entities, &tokens, &interner, &acts));
            }
        }

        if let Some(segmentation) = &segmentation {
            graph.push(clause_relation_node(namespace, segmentation));
        }

        let parsing_act_id = mint_iri(namespace, "ParsingAct", "Parse", &[&normalized]);
        let mut parsing_act = Node::new(parsing_act_id.clone(), vec!["IntentionalAct".to_string()]);
        parsing_act.set("actuality", PropertyValue::Literal("Actual".to_string()));
        parsing_act.set("input", PropertyValue::Iri(ibe_id.clone()));
        parsing_act.set("agent", PropertyValue::Iri(parser_agent_id.clone()));
        parsing_act.set("outputs", PropertyValue::IriList(entity_iris.clone()));
        if let Some(mode) = &sentence_mode {
            parsing_act.set("sentenceMode", PropertyValue::Literal(format!("{:?}", mode)));
        }
        graph.push(parsing_act);

        for node in graph.iter_mut() {
            if node.has_type("InformationContentEntity") {
                node.set("is_concretized_by", PropertyValue::Iri(ibe_id.clone()));
            }
        }

        for _ in 0..graph.len() {
            if let Some(overrun) = tracker.record_node() {
                if tracker.throw_on_exceed() {
                    return Err(overrun.into());
                }
                return Ok(BuildResult {
                    metadata: BuildMetadata {
                        input_length: text.len(),
                        node_count: graph.len(),
                        version: PIPELINE_VERSION.to_string(),
                        context_iri: options.context.clone(),
                        ibe_iri: ibe_id,
                        parser_agent_iri: parser_agent_id,
                        truncated: true,
                        rejected: None,
                    },
                    graph,
                    ambiguity_report,
                });
            }
        }

        Ok(BuildResult {
            metadata: BuildMetadata {
                input_length: text.len(),
                node_count: graph.len(),
                version: PIPELINE_VERSION.to_string(),
                context_iri: options.context.clone(),
                ibe_iri: ibe_id,
                parser_agent_iri: parser_agent_id,
                truncated: truncated_by_overrun,
                rejected: None,
            },
            graph,
            ambiguity_report,
        })
    }
}

/// Convenience entry point matching the primary external call shape:
/// `build(text, options)`. Runs with unweighted default models (every tag/
/// arc candidate ties), so most callers with real models should build a
/// [`GraphBuilder`] via [`GraphBuilder::from_paths`] instead and call its
/// `build` method directly.
pub fn build(text: &str, options: &BuildOptions) -> Result<BuildResult, PipelineError> {
    GraphBuilder::new(PosModel::default(), DepModel::default()).build(text, options)
}

fn empty_result(reason: &str) -> BuildResult {
    BuildResult {
        graph: Vec::new(),
        metadata: BuildMetadata {
            input_length: 0,
            node_count: 0,
            version: PIPELINE_VERSION.to_string(),
            context_iri: None,
            ibe_iri: String::new(),
            parser_agent_iri: String::new(),
            truncated: false,
            rejected: Some(reason.to_string()),
        },
        ambiguity_report: Vec::new(),
    }
}

fn truncated_result(input_length: usize, reason: String) -> BuildResult {
    BuildResult {
        graph: Vec::new(),
        metadata: BuildMetadata {
            input_length,
            node_count: 0,
            version: PIPELINE_VERSION.to_string(),
            context_iri: None,
            ibe_iri: String::new(),
            parser_agent_iri: String::new(),
            truncated: true,
            rejected: Some(reason),
        },
        ambiguity_report: Vec::new(),
    }
}

fn verb_object_tail(tokens: &[Token], arcs: &[Arc]) -> Option<Vec<Token>> {
    let verb_id = tokens.iter().find(|t| t.pos.is_verb())?.id;
    let obj_id = arcs.iter().find(|a| a.head_id == verb_id && a.label == "obj")?.dependent_id;
    Some(tokens.iter().filter(|t| t.id >= obj_id).cloned().collect())
}

/// Mints a Tier-2 real-world entity's IRI. Shared by [`tier2_entity_node`]
/// and [`role_node`] so a role's `bearer` resolves to the same IRI the
/// entity itself was minted with, rather than a second derivation.
fn entity_tier2_id(namespace: &str, entity: &Entity, head_text: &str) -> String {
    mint_iri(
        namespace,
        &entity.denoted_type,
        &clean_text_segment(head_text),
        &[&entity.head_token_id.to_string(), &entity.denoted_type],
    )
}

/// Mints the Tier-2 `RealWorldEntity` node: the denoted individual
/// (Person, Artifact, …) that one or more Tier-1 mentions are about.
fn tier2_entity_node(namespace: &str, entity: &Entity, tokens: &[Token], interner: &Interner, ibe_id: &str, create_aggregates: bool) -> Node {
    let head = tokens.iter().find(|t| t.id == entity.head_token_id);
    let head_text = head.map(|t| interner.resolve(t.text)).unwrap_or("");
    let id = entity_tier2_id(namespace, entity, head_text);
    let mut types = vec![entity.denoted_type.clone()];
    let is_plural = matches!(head.map(|t| t.pos), Some(PosTag::NounPlural) | Some(PosTag::ProperNounPlural));
    if create_aggregates && is_plural {
        types.push("ObjectAggregate".to_string());
    }
    let mut node = Node::new(id, types);
    node.set("label", PropertyValue::Literal(head_text.to_string()));
    if !entity.aliases.is_empty() {
        node.set("aliases", PropertyValue::Literal(entity.aliases.join("; ")));
    }
    if entity.denoted_type == "InformationContentEntity" {
        node.set("is_concretized_by", PropertyValue::Iri(ibe_id.to_string()));
    }
    if entity.resolution_provenance != "none" {
        node.set("resolution_provenance", PropertyValue::Literal(entity.resolution_provenance.clone()));
    }
    node
}

/// Mints the Tier-1 `DiscourseReferent` node: the linguistic mention
/// itself, pointing at its Tier-2 entity via `is_about` (I2/P4).
fn tier1_referent_node(namespace: &str, entity: &Entity, tokens: &[Token], arcs: &[Arc], interner: &Interner, tier2_id: &str) -> Node {
    let head = tokens.iter().find(|t| t.id == entity.head_token_id);
    let head_text = head.map(|t| interner.resolve(t.text)).unwrap_or("");
    let span_tokens: Vec<&Token> = entity.span_token_ids.iter().filter_map(|id| tokens.iter().find(|t| t.id == *id)).collect();
    let mention_text = span_tokens.iter().map(|t| interner.resolve(t.text)).collect::<Vec<_>>().join(" ");
    let span = span_tokens.iter().map(|t| t.span).reduce(|a, b| a.merge(b)).unwrap_or_default();

    let id = mint_iri(namespace, "DiscourseReferent", &clean_text_segment(head_text), &[&entity.head_token_id.to_string(), "mention"]);
    let mut node = Node::new(id, vec!["DiscourseReferent".to_string()]);
    node.set("text", PropertyValue::Literal(mention_text));
    node.set("span", PropertyValue::Literal(format!("{}:{}", span.start, span.end)));
    node.set("referentialStatus", PropertyValue::Literal(referential_status(entity, tokens, arcs, interner).to_string()));
    node.set("is_about", PropertyValue::Iri(tier2_id.to_string()));
    if let Some(preposition) = &entity.introducing_preposition {
        node.set("introducingPreposition", PropertyValue::Literal(preposition.clone()));
    }
    node
}

/// Classifies a mention's `referentialStatus`: a pronoun head is anaphoric,
/// a proper noun head is definite by default, and a common noun's
/// determiner ("the" vs "a"/"an") decides definite vs indefinite; a bare
/// head with neither falls back to generic.
fn referential_status(entity: &Entity, tokens: &[Token], arcs: &[Arc], interner: &Interner) -> &'static str {
    let head = tokens.iter().find(|t| t.id == entity.head_token_id);
    if let Some(h) = head {
        if h.pos == PosTag::Pronoun {
            return "anaphoric";
        }
        if h.pos.is_proper_noun() {
            return "definite";
        }
    }
    let det_word = arcs
        .iter()
        .find(|a| a.head_id == entity.head_token_id && a.label == "det")
        .and_then(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .map(|t| interner.resolve(t.text).to_lowercase());
    match det_word.as_deref() {
        Some("the") => "definite",
        Some("a") | Some("an") => "indefinite",
        _ => "generic",
    }
}

/// Mints a `ComplexDesignator` node for one detected span (§4.10): a long
/// capitalized proper name treated as a single entity.
fn designator_node(namespace: &str, designator: &DesignatorSpan) -> Node {
    let joined_ids = designator.token_ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
    let id = mint_iri(namespace, "ComplexDesignator", &clean_text_segment(&designator.full_name), &[&designator.full_name, &joined_ids]);
    let mut node = Node::new(id, vec!["ComplexDesignator".to_string(), designator.denoted_type.clone()]);
    node.set("full_name", PropertyValue::Literal(designator.full_name.clone()));
    node.set("denoted_type", PropertyValue::Literal(designator.denoted_type.clone()));
    node
}

/// `amod`-labeled children of `head_id`: the adjectives modifying it.
fn amod_children<'a>(head_id: usize, arcs: &[Arc], tokens: &'a [Token]) -> Vec<&'a Token> {
    arcs.iter()
        .filter(|a| a.head_id == head_id && a.label == "amod")
        .filter_map(|a| tokens.iter().find(|t| t.id == a.dependent_id))
        .collect()
}

fn node_id_for_act(namespace: &str, act: &Act) -> String {
    mint_iri(namespace, "Act", &clean_text_segment(&act.lemma), &[&act.lemma, &act.verb_token_id.to_string()])
}

fn act_node(namespace: &str, act: &Act) -> Node {
    let id = node_id_for_act(namespace, act);
    let mut node = Node::new(id, vec![act.ontology_type.clone()]);
    node.set("lemma", PropertyValue::Literal(act.lemma.clone()));
    node.set("actuality", PropertyValue::Literal(format!("{:?}", act.actuality)));
    node.set("is_passive", PropertyValue::Flag(act.is_passive));
    node.set("is_negated", PropertyValue::Flag(act.is_negated));
    if let Some(modality) = &act.modality {
        node.set("modality", PropertyValue::Literal(modality.clone()));
    }
    if let Some(control_verb) = &act.control_verb {
        node.set("controlVerb", PropertyValue::Literal(control_verb.clone()));
    }
    node
}

fn directive_node(namespace: &str, act: &Act, act_id: &str) -> Option<Node> {
    if !matches!(act.actuality, Actuality::Prescribed) {
        return None;
    }
    let id = mint_iri(namespace, "DirectiveContent", &clean_text_segment(&act.lemma), &[&act.lemma, "directive", &act.verb_token_id.to_string()]);
    let mut node = Node::new(id, vec!["DirectiveContent".to_string()]);
    node.set("prescribes", PropertyValue::Iri(act_id.to_string()));
    if let Some(modality) = &act.modality {
        node.set("modality", PropertyValue::Literal(modality.clone()));
    }
    Some(node)
}

fn role_node(namespace: &str, role: &Role, entities: &[Entity], tokens: &[Token], interner: &Interner, acts: &[Act]) -> Node {
    let bearer_text = tokens
        .iter()
        .find(|t| t.id == role.bearer_token_id)
        .map(|t| interner.resolve(t.text))
        .unwrap_or("");
    let id = mint_iri(
        namespace,
        &role.role_type,
        &clean_text_segment(bearer_text),
        &[&role.role_type, &role.bearer_token_id.to_string()],
    );
    let mut node = Node::new(id, vec![role.role_type.clone()]);
    node.set("udLabel", PropertyValue::Literal(role.ud_label.clone()));
    if let Some(preposition) = &role.preposition {
        node.set("preposition", PropertyValue::Literal(preposition.clone()));
    }

    if let Some(entity) = entities.iter().find(|e| e.head_token_id == role.bearer_token_id) {
        node.set("bearer", PropertyValue::Iri(entity_tier2_id(namespace, entity, bearer_text)));
    }

    let realized: Vec<String> = role
        .realized_in
        .iter()
        .filter_map(|verb_id| acts.iter().find(|a| a.verb_token_id == *verb_id))
        .map(|a| node_id_for_act(namespace, a))
        .collect();
    if !realized.is_empty() {
        node.set("realized_in", PropertyValue::IriList(realized));
    }

    let would_be: Vec<String> = role
        .would_be_realized_in
        .iter()
        .filter_map(|verb_id| acts.iter().find(|a| a.verb_token_id == *verb_id))
        .map(|a| node_id_for_act(namespace, a))
        .collect();
    if !would_be.is_empty() {
        node.set("would_be_realized_in", PropertyValue::IriList(would_be));
    }

    node
}

fn clause_relation_node(namespace: &str, segmentation: &clause::Segmentation) -> Node {
    let relation_name = segmentation.relation;
    let id = mint_iri(namespace, "ClauseRelation", relation_name, &[relation_name, &segmentation.conjunction_token_id.to_string()]);
    let mut node = Node::new(id, vec!["ClauseRelation".to_string()]);
    node.set("relation", PropertyValue::Literal(relation_name.to_string()));
    node
}

use crate::parser::Arc;
