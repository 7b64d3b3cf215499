use std::{collections::HashMap, rc::Rc};

use log::{debug, trace};

use crate::{
    ast::{
        Assign, Block, Compound, Declaration, Expr, NodeId, ProcedureCall, ProcedureDecl, Program,
        Statement, TypeRef, Var, VarDecl,
    },
    error::SemanticError,
    interpreter::{
        lexer::Position,
        semantic::{
            scope::Scope,
            symbol::{BuiltinType, ProcedureSymbol, Symbol, VarSymbol},
        },
    },
};

/// Result type used by the semantic analyzer.
pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Resolutions produced by a successful analysis.
///
/// The tree is never modified; instead every `ProcedureCall` and `Var` node
/// is looked up here by its [`NodeId`].
#[derive(Debug)]
pub struct Analysis<'ast> {
    calls:     HashMap<NodeId, Rc<ProcedureSymbol<'ast>>>,
    variables: HashMap<NodeId, usize>,
    global:    Scope<'ast>,
}

impl<'ast> Analysis<'ast> {
    /// Returns the procedure a call node resolved to.
    #[must_use]
    pub fn procedure(&self, call: NodeId) -> Option<&Rc<ProcedureSymbol<'ast>>> {
        self.calls.get(&call)
    }

    /// Returns the nesting level of the scope that declares the variable a
    /// `Var` node refers to.
    #[must_use]
    pub fn declared_level(&self, var: NodeId) -> Option<usize> {
        self.variables.get(&var).copied()
    }

    /// The global scope as it stood at the end of the pass.
    #[must_use]
    pub const fn global_scope(&self) -> &Scope<'ast> {
        &self.global
    }
}

/// Checks a parsed program and resolves every name in it.
///
/// # Parameters
/// - `program`: The tree to analyze. The returned [`Analysis`] borrows the
///   procedure bodies from it.
///
/// # Returns
/// The side table mapping call and variable nodes to their resolutions.
///
/// # Errors
/// Returns the first [`SemanticError`] found; the pass stops there.
///
/// # Example
/// ```
/// use pascalina::{interpreter::semantic::analyzer::analyze, parse};
///
/// let program = parse("PROGRAM P; VAR x : INTEGER; BEGIN x := 1 END.").unwrap();
/// assert!(analyze(&program).is_ok());
///
/// let program = parse("PROGRAM P; BEGIN x := 1 END.").unwrap();
/// assert!(analyze(&program).is_err());
/// ```
pub fn analyze(program: &Program) -> AnalysisResult<Analysis<'_>> {
    SemanticAnalyzer::new().run(program)
}

/// Depth-first walker that owns the scope chain during analysis.
///
/// `current` is the innermost open scope; `enclosing` holds the rest of the
/// chain, outermost first.
struct SemanticAnalyzer<'ast> {
    current:   Scope<'ast>,
    enclosing: Vec<Scope<'ast>>,
    calls:     HashMap<NodeId, Rc<ProcedureSymbol<'ast>>>,
    variables: HashMap<NodeId, usize>,
}

impl<'ast> SemanticAnalyzer<'ast> {
    fn new() -> Self {
        Self { current:   Scope::global(),
               enclosing: Vec::new(),
               calls:     HashMap::new(),
               variables: HashMap::new(), }
    }

    fn run(mut self, program: &'ast Program) -> AnalysisResult<Analysis<'ast>> {
        debug!("ENTER scope: {}", self.current.name());
        self.visit_block(&program.block)?;
        debug!("LEAVE scope: {}", self.current.name());
        trace!("{}", self.current);

        Ok(Analysis { calls:     self.calls,
                      variables: self.variables,
                      global:    self.current, })
    }

    fn enter_scope(&mut self, name: &str) {
        let level = self.current.level() + 1;
        let scope = Scope::new(name, level, Some(self.current.name().to_string()));
        let parent = std::mem::replace(&mut self.current, scope);
        self.enclosing.push(parent);
        debug!("ENTER scope: {name}");
    }

    fn leave_scope(&mut self) {
        if let Some(parent) = self.enclosing.pop() {
            let closed = std::mem::replace(&mut self.current, parent);
            debug!("LEAVE scope: {}", closed.name());
            trace!("{closed}");
        }
    }

    /// Resolves `name` walking outward from the innermost scope, returning
    /// the symbol and the level of the scope that declares it.
    fn lookup(&self, name: &str) -> Option<(&Symbol<'ast>, usize)> {
        std::iter::once(&self.current).chain(self.enclosing.iter().rev())
                                      .find_map(|scope| {
                                          scope.lookup_local(name)
                                               .map(|symbol| (symbol, scope.level()))
                                      })
    }

    fn declare(&mut self, symbol: Symbol<'ast>, position: Position)
               -> AnalysisResult<()> {
        let name = symbol.name().to_string();
        if self.current.insert(symbol) {
            Ok(())
        } else {
            Err(SemanticError::DuplicateIdentifier { name, position })
        }
    }

    fn resolve_type(&self, type_ref: &TypeRef) -> AnalysisResult<BuiltinType> {
        match self.lookup(&type_ref.name) {
            Some((Symbol::Type(ty), _)) => Ok(*ty),
            _ => Err(SemanticError::UndefinedType { name:     type_ref.name.clone(),
                                                    position: type_ref.position, }),
        }
    }

    fn visit_block(&mut self, block: &'ast Block) -> AnalysisResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Var(decl) => self.visit_var_decl(decl)?,
                Declaration::Procedure(decl) => self.visit_procedure_decl(decl)?,
            }
        }
        self.visit_compound(&block.compound)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> AnalysisResult<()> {
        let ty = self.resolve_type(&decl.type_ref)?;
        self.declare(Symbol::Var(VarSymbol { name: decl.name.clone(),
                                             ty }),
                     decl.position)
    }

    /// Declares the procedure in the enclosing scope before its body is
    /// visited, so the body may call it recursively.
    fn visit_procedure_decl(&mut self, decl: &'ast ProcedureDecl) -> AnalysisResult<()> {
        let params = decl.params
                         .iter()
                         .map(|param| {
                             self.resolve_type(&param.type_ref)
                                 .map(|ty| VarSymbol { name: param.name.clone(),
                                                       ty })
                         })
                         .collect::<AnalysisResult<Vec<_>>>()?;

        let procedure = Rc::new(ProcedureSymbol { name: decl.name.clone(),
                                                  params,
                                                  scope_level: self.current.level(),
                                                  body: &decl.block });
        self.declare(Symbol::Procedure(Rc::clone(&procedure)), decl.position)?;

        self.enter_scope(&decl.name);
        let result = self.visit_procedure_scope(decl, &procedure);
        self.leave_scope();
        result
    }

    fn visit_procedure_scope(&mut self,
                             decl: &'ast ProcedureDecl,
                             procedure: &ProcedureSymbol<'ast>)
                             -> AnalysisResult<()> {
        for (param, symbol) in decl.params.iter().zip(&procedure.params) {
            self.declare(Symbol::Var(symbol.clone()), param.position)?;
        }
        self.visit_block(&decl.block)
    }

    fn visit_compound(&mut self, compound: &Compound) -> AnalysisResult<()> {
        compound.statements
                .iter()
                .try_for_each(|statement| self.visit_statement(statement))
    }

    fn visit_statement(&mut self, statement: &Statement) -> AnalysisResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound),
            Statement::Assign(assign) => self.visit_assign(assign),
            Statement::ProcedureCall(call) => self.visit_call(call),
            Statement::NoOp => Ok(()),
        }
    }

    fn visit_assign(&mut self, assign: &Assign) -> AnalysisResult<()> {
        self.visit_expr(&assign.value)?;
        self.visit_var(&assign.target)
    }

    fn visit_call(&mut self, call: &ProcedureCall) -> AnalysisResult<()> {
        for argument in &call.arguments {
            self.visit_expr(argument)?;
        }

        let procedure = match self.lookup(&call.name) {
            Some((Symbol::Procedure(procedure), _)) => Rc::clone(procedure),
            Some(_) => {
                return Err(SemanticError::NotAProcedure { name:     call.name.clone(),
                                                          position: call.position, });
            },
            None => {
                return Err(SemanticError::UndefinedIdentifier { name:     call.name.clone(),
                                                                position: call.position, });
            },
        };

        if procedure.params.len() != call.arguments.len() {
            return Err(SemanticError::ArgumentCountMismatch { name:     call.name.clone(),
                                                              expected: procedure.params.len(),
                                                              found:    call.arguments.len(),
                                                              position: call.position, });
        }

        self.calls.insert(call.id, procedure);
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> AnalysisResult<()> {
        match expr {
            Expr::Num { .. } => Ok(()),
            Expr::Var(var) => self.visit_var(var),
            Expr::UnaryOp { expr, .. } => self.visit_expr(expr),
            Expr::BinaryOp { left, right, .. } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            },
        }
    }

    fn visit_var(&mut self, var: &Var) -> AnalysisResult<()> {
        let level = match self.lookup(&var.name) {
            Some((Symbol::Var(_), level)) => level,
            Some(_) => {
                return Err(SemanticError::NotAVariable { name:     var.name.clone(),
                                                         position: var.position, });
            },
            None => {
                return Err(SemanticError::UndefinedIdentifier { name:     var.name.clone(),
                                                                position: var.position, });
            },
        };
        self.variables.insert(var.id, level);
        Ok(())
    }
}
