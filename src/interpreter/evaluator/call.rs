use log::{debug, trace};

use crate::{
    ast::ProcedureCall,
    error::RuntimeError,
    interpreter::{
        call_stack::{ActivationRecord, RecordKind},
        evaluator::core::{EvalResult, Interpreter},
    },
};

impl Interpreter<'_, '_> {
    /// Executes a procedure call.
    ///
    /// Arguments are evaluated in the caller's context. The new record sits
    /// one level below the scope the procedure was declared in and links
    /// statically to the nearest record of that scope on the caller's chain.
    /// The record is popped again whether or not the body succeeds.
    ///
    /// # Errors
    /// - `RuntimeError::UnresolvedProcedure` if the call was not analyzed.
    /// - `RuntimeError::CallDepthExceeded` past the configured call depth.
    /// - Any error raised by the arguments or the body.
    pub(super) fn eval_procedure_call(&mut self, call: &ProcedureCall) -> EvalResult<()> {
        let analysis = self.analysis;
        let procedure =
            analysis.procedure(call.id)
                    .ok_or_else(|| RuntimeError::UnresolvedProcedure { name:     call.name.clone(),
                                                                       position: call.position, })?;

        // The program record does not count toward the depth.
        if self.call_stack.len() > self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit:    self.options.max_call_depth,
                                                         position: call.position, });
        }

        let arguments = call.arguments
                            .iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        let static_link = self.call_stack.resolve(procedure.scope_level);
        let mut record = ActivationRecord::new(&procedure.name,
                                               RecordKind::Procedure,
                                               procedure.scope_level + 1,
                                               static_link);
        for (param, value) in procedure.params.iter().zip(arguments) {
            record.set(&param.name, value);
        }

        self.call_stack.push(record);
        debug!("ENTER: PROCEDURE {}", procedure.name);
        trace!("{}", self.call_stack);

        let result = self.visit_block(procedure.body);

        trace!("{}", self.call_stack);
        debug!("LEAVE: PROCEDURE {}", procedure.name);
        self.call_stack.pop();
        result
    }
}
