//! The founder's letter, shown as a second view over the page.

pub const LETTER_HEADING: &str = "hey, i'm kofi :)";

pub const LETTER: [&str; 13] = [
    "hey there,",
    "i'm kofi, and i started ventured because i kept seeing the same thing over and over \
     growing up in baltimore.",
    "i was adopted by white parents and raised in roland park, going to schools with 3D \
     printers and coding clubs. but just a few miles away, kids just as smart as me, probably \
     smarter, had never even heard of python or javascript, let alone had the chance to learn \
     them.",
    "it wasn't a talent gap. it was an opportunity gap.",
    "that's the thing about talent: it's everywhere. in every neighborhood, every demographic, \
     every background. but opportunity? that's concentrated in specific pockets, flowing to the \
     already-privileged, creating this cycle where the same types of people keep building the \
     same types of solutions for the same types of problems.",
    "ventured exists to break that cycle.",
    "we don't 'discover diamonds in the rough', because that framing gets it backward. talent \
     isn't rare. opportunity is.",
    "when we connect young people from cherry hill or sandtown-winchester with internships at \
     tech companies, we're not doing charity. we're unlocking innovation that wouldn't happen \
     otherwise. we're creating pathways for new ideas to emerge from new perspectives.",
    "because here's what i know for sure: the kid who's never seen the inside of a tech company \
     might be the only one who can solve a problem the tech industry doesn't even know it has.",
    "this work isn't just about diversity for diversity's sake. it's about expanding who gets \
     to innovate, what problems get solved, and ultimately, who benefits from technology and \
     entrepreneurship.",
    "if you're reading this, you're part of this journey now. whether you're a student looking \
     for opportunity, a company looking for talent, or a supporter looking to make an impact: \
     welcome.",
    "let's build a world where talent and opportunity are both evenly distributed.",
    "- kofi",
];
