use crate::Card;

/// A course handout with one section, two subsections, an exercise, a
/// theorem and a lemma. Math spans hold backslashes and braces that must not
/// be read as commands.
pub(crate) const COURSE_NOTES: &str = r"
\documentclass[11pt,a4paper]{article} % compile with pdfLaTeX

\usepackage{mathtools, esint, eucal}
\usepackage[utf8]{inputenc} % Accents and special characters
\usepackage[T1]{fontenc}


\begin{document}

\title{Ensembles finis}
\date{2022/11/28}
\maketitle

\pagebreak

\section{1}

\subsection{1}

\begin{exercise}[TD 1 Ex 3]
\begin{question}
    (a) Soient $A$ et $B$ deux ensembles finis de même cardinal, $|A| = |B|$, et soit \\
    $f: A \rightarrow B$ une application. Montrer que les propriétés suivantes sont équivalentes: \\
     (i) $f$ est injective \\
     (ii) $f$ est surjective \\
     (iii) $f$ est une bijection \\
     \par
     (b) Donner un exemple d'application injective $f: \N \rightarrow \N$ qui ne soit pas surjective. \\
     En déduire que $\N$ n'est pas fini.\\
\end{question}
\begin{solution}
    (a) Supposons que $f$ est injective mais pas surjective, alors il existe $b \in B \setminus f(A)$. \\
    D'où $|A| \leq |B \setminus \{b\}| = |B| - 1$ par le principe d'injection, ce qui est une contradiction. \\
    \par
		\newcommand\test{haha}
		\test{}
    (b) $n \mapsto n + 1$ est une injection mais pas une surjection, et $n \mapsto \frac{n}{2}$ si $n$ pair. \\
    Puisqu'il existe des applications non bijectives de $\N$ dans $\N$, alors $\N$ n'est pas fini.
\end{solution}
\end{exercise}

\subsection{2}

\subsubsection{1}

\begin{theo}[the name of the theorem]
    Bla bli blo
\end{theo}

\subsubsection{2}

\begin{lem}[the name of the lemma]
    Haha hihi hoho
\end{lem}

\end{document}
";

/// The cards written to [`DELIMITED_DECK`].
pub(crate) fn delimited_cards() -> Vec<Card> {
	vec![
		Card::new(
			"algebra::groups",
			"What is a group?",
			"A set with an associative operation, an identity and inverses.",
		),
		Card::new(
			"algebra::rings",
			"What is a ring?",
			"An abelian group with a distributive multiplication.",
		),
	]
}

pub(crate) const DELIMITED_DECK: &str = "% --- CARD ---
algebra::groups
% ------------
What is a group?
% ------------
A set with an associative operation, an identity and inverses.
% --- CARD ---
algebra::rings
% ------------
What is a ring?
% ------------
An abelian group with a distributive multiplication.
";
