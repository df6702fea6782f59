//! Accumulator Module
//!
//! Collects list-item operations into size-bounded segments and drives their
//! submission.
//!
//! ## Responsibilities
//! - Stamp every operation with an accumulator-wide sequence id
//! - Open a new segment whenever the active one reaches the cap
//! - Render one document per segment
//! - Submit documents strictly in order, stopping at the first failure

use tracing::{debug, warn};

use crate::config::{Config, EscapeMode, DEFAULT_SEGMENT_CAP};
use crate::error::Result;
use crate::protocol::{render_document, Document, ErrorPolicy, Field, Method, Operation};
use crate::submit::Submitter;

/// An ordered group of methods rendered into one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    methods: Vec<Method>,
}

impl Segment {
    /// Reserve room for at most one default-sized batch; larger caps grow on demand
    fn with_capacity(cap: usize) -> Self {
        Self {
            methods: Vec::with_capacity(cap.min(DEFAULT_SEGMENT_CAP)),
        }
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn render(&self, policy: ErrorPolicy, mode: EscapeMode) -> Document {
        render_document(policy, &self.methods, mode)
    }
}

/// Accumulates operations into bounded batch segments
///
/// ## Lifecycle
///
/// - Created holding one empty segment and a counter at zero
/// - Mutated only through `append` and its wrappers (`&mut self`)
/// - Consumed by `run`, which may be called again but will resubmit
///   everything
///
/// ## Segmentation
///
/// Every segment except the last holds exactly `segment_cap` methods. The
/// last holds between 1 and `segment_cap`, or 0 when nothing was appended.
#[derive(Debug, Clone)]
pub struct BatchAccumulator {
    /// Cap, policy and escaping
    config: Config,

    /// Segments in arrival order; never empty
    segments: Vec<Segment>,

    /// Sequence id handed to the next appended operation
    next_sequence_id: u64,
}

impl BatchAccumulator {
    /// Create an accumulator with the default cap and the given policy
    pub fn new(error_policy: ErrorPolicy) -> Self {
        let config = Config {
            error_policy,
            ..Config::default()
        };
        Self::from_valid_config(config)
    }

    /// Create an accumulator from a config
    ///
    /// Fails if the segment cap is zero.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        let first = Segment::with_capacity(config.segment_cap);
        Self {
            config,
            segments: vec![first],
            next_sequence_id: 0,
        }
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Queue an operation
    ///
    /// Starts a new segment first if the active one is full. Field names and
    /// values are not validated.
    pub fn append(&mut self, operation: Operation) {
        let cap = self.config.segment_cap;

        let needs_segment = self.segments.last().map_or(true, |s| s.len() >= cap);
        if needs_segment {
            self.segments.push(Segment::with_capacity(cap));
            debug!(
                segment = self.segments.len() - 1,
                first_sequence_id = self.next_sequence_id,
                "Opened batch segment"
            );
        }

        let sequence_id = self.next_sequence_id;
        self.next_sequence_id += 1;

        if let Some(active) = self.segments.last_mut() {
            active.methods.push(Method {
                sequence_id,
                operation,
            });
        }
    }

    /// Queue creation of a new item
    pub fn create_item<I, F>(&mut self, target: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.append(Operation::create(target, fields));
    }

    /// Queue an update of item `id`
    pub fn update_item<I, F>(&mut self, target: impl Into<String>, id: u32, fields: I)
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.append(Operation::update(target, id, fields));
    }

    /// Queue deletion of item `id`
    pub fn delete_item(&mut self, target: impl Into<String>, id: u32) {
        self.append(Operation::delete(target, id));
    }

    // =========================================================================
    // Rendering and Submission
    // =========================================================================

    /// Render one document per segment
    ///
    /// Does not mutate state; repeated calls yield identical documents.
    pub fn render(&self) -> Vec<Document> {
        let policy = self.config.error_policy;
        let mode = self.config.escape_mode;
        self.segments
            .iter()
            .map(|segment| segment.render(policy, mode))
            .collect()
    }

    /// Submit every segment in order and collect the acknowledgements
    ///
    /// Each acknowledgement is followed by a newline in the returned string.
    /// The first submission error is returned as-is; later segments are not
    /// submitted and earlier ones are not undone.
    pub fn run<S>(&self, submitter: &mut S) -> std::result::Result<String, S::Error>
    where
        S: Submitter + ?Sized,
    {
        let documents = self.render();
        let total = documents.len();
        let mut acknowledgements = String::new();

        for (index, document) in documents.iter().enumerate() {
            debug!(
                segment = index,
                of = total,
                methods = document.method_count(),
                policy = %document.error_policy(),
                "Submitting batch"
            );

            match submitter.submit(document) {
                Ok(ack) => {
                    acknowledgements.push_str(&ack);
                    acknowledgements.push('\n');
                }
                Err(e) => {
                    warn!(
                        segment = index,
                        of = total,
                        "Batch submission failed, skipping remaining segments"
                    );
                    return Err(e);
                }
            }
        }

        Ok(acknowledgements)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn error_policy(&self) -> ErrorPolicy {
        self.config.error_policy
    }

    /// Change the policy stamped on documents rendered from now on
    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.config.error_policy = policy;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the segments in submission order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total number of queued operations
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.next_sequence_id == 0
    }

    /// Sequence id the next appended operation will receive
    pub fn next_sequence_id(&self) -> u64 {
        self.next_sequence_id
    }
}

impl Default for BatchAccumulator {
    fn default() -> Self {
        Self::new(ErrorPolicy::default())
    }
}
