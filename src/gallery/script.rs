//! Browser runtime emitted into built pages. It drives the overlays the same
//! way [`super::GalleryController`] does: the same states, delays, class swaps
//! and listener release on final close, plus epoch checks on both timers.
//! Every `data-gallery-id` trigger opens the overlay it names.
//!
//! The body avoids `<` and `&` so the tag stays well-formed markup.

use super::{
    ACTIVE, CLOSE, CLOSE_DELAY, CONTENT, COUNTER, DOT, DOT_ACTIVE, DOT_INACTIVE, HIDDEN, NEXT,
    OPACITY_HIDDEN, OPACITY_VISIBLE, OPEN_TICK, PREV, SCALE_COLLAPSED, SCALE_EXPANDED, SLIDE,
};

/// Attribute carried by the buttons that open a gallery.
pub const TRIGGER_ATTR: &str = "data-gallery-id";

/// Global the runtime installs, exposing `open`, `close`, `next`, `previous`.
pub const RUNTIME_GLOBAL: &str = "folioGallery";

pub fn runtime_script() -> String {
    format!(
        "<script>\
\n(function(){{\
\nvar OPEN_TICK={open_tick},CLOSE_DELAY={close_delay};\
\nvar state='closed',current=0,overlay=null,bound=[],epoch=0;\
\nfunction each(root,sel,fn){{Array.prototype.forEach.call(root.querySelectorAll(sel),fn);}}\
\nfunction swap(el,off,on){{el.classList.remove(off);el.classList.add(on);}}\
\nfunction live(){{return state==='opening'||state==='open';}}\
\nfunction hold(el,kind,fn){{el.addEventListener(kind,fn);bound.push([el,kind,fn]);}}\
\nfunction bind(el,fn){{if(!el)return;hold(el,'click',fn);hold(el,'touchend',fn);}}\
\nfunction release(){{bound.forEach(function(b){{b[0].removeEventListener(b[1],b[2]);}});bound=[];}}\
\nfunction collapse(){{\
\n    if(!overlay)return;\
\n    swap(overlay,'{opacity_visible}','{opacity_hidden}');\
\n    var c=overlay.querySelector('.{content}');\
\n    if(c)swap(c,'{scale_expanded}','{scale_collapsed}');\
\n}}\
\nfunction finishClose(){{\
\n    if(overlay)overlay.classList.add('{hidden}');\
\n    document.body.style.overflow='';\
\n    release();\
\n    overlay=null;current=0;state='closed';\
\n}}\
\nfunction showSlide(i){{\
\n    if(!live()||!overlay)return;\
\n    var slides=overlay.querySelectorAll('.{slide}'),n=slides.length;\
\n    if(n===0)return;\
\n    i=((i%n)+n)%n;current=i;\
\n    each(overlay,'.{slide}',function(s,k){{\
\n        s.classList.toggle('{active}',k===i);\
\n        s.style.display=k===i?'flex':'none';\
\n    }});\
\n    each(overlay,'.{dot}',function(d,k){{\
\n        if(k===i)swap(d,'{dot_inactive}','{dot_active}');else swap(d,'{dot_active}','{dot_inactive}');\
\n    }});\
\n    var counter=overlay.querySelector('.{counter}');\
\n    if(counter)counter.textContent=(i+1)+' / '+n;\
\n}}\
\nfunction close(){{\
\n    if(!live())return;\
\n    collapse();state='closing';\
\n    var e=epoch;\
\n    setTimeout(function(){{if(e!==epoch||state!=='closing')return;finishClose();}},CLOSE_DELAY);\
\n}}\
\nfunction onKey(ev){{\
\n    if(!live()||!overlay||overlay.classList.contains('{hidden}'))return;\
\n    if(ev.key==='Escape')close();\
\n    else if(ev.key==='ArrowLeft')showSlide(current-1);\
\n    else if(ev.key==='ArrowRight')showSlide(current+1);\
\n}}\
\nfunction control(fn){{return function(ev){{ev.preventDefault();ev.stopPropagation();fn();}};}}\
\nfunction open(id){{\
\n    var el=document.getElementById(id);\
\n    if(!el){{console.warn('gallery '+id+' not found');return;}}\
\n    if(state!=='closed'){{collapse();finishClose();}}\
\n    epoch+=1;overlay=el;current=0;state='opening';\
\n    el.classList.remove('{hidden}');\
\n    var e=epoch;\
\n    setTimeout(function(){{\
\n        if(e!==epoch||state!=='opening')return;\
\n        swap(el,'{opacity_hidden}','{opacity_visible}');\
\n        var c=el.querySelector('.{content}');\
\n        if(c)swap(c,'{scale_collapsed}','{scale_expanded}');\
\n        state='open';\
\n    }},OPEN_TICK);\
\n    document.body.style.overflow='hidden';\
\n    bind(el.querySelector('.{close}'),control(close));\
\n    bind(el,function(ev){{if(ev.target!==el)return;ev.preventDefault();close();}});\
\n    bind(el.querySelector('.{prev}'),control(function(){{showSlide(current-1);}}));\
\n    bind(el.querySelector('.{next}'),control(function(){{showSlide(current+1);}}));\
\n    each(el,'.{dot}',function(d,k){{bind(d,control(function(){{showSlide(k);}}));}});\
\n    hold(window,'keydown',onKey);\
\n    showSlide(0);\
\n}}\
\neach(document,'[{trigger}]',function(btn){{\
\n    btn.addEventListener('click',function(ev){{ev.preventDefault();open(btn.getAttribute('{trigger}'));}});\
\n}});\
\nwindow.{global}={{open:open,close:close,\
\n    next:function(){{showSlide(current+1);}},previous:function(){{showSlide(current-1);}}}};\
\n}})();\
\n</script>\n",
        open_tick = OPEN_TICK.as_millis(),
        close_delay = CLOSE_DELAY.as_millis(),
        opacity_hidden = OPACITY_HIDDEN,
        opacity_visible = OPACITY_VISIBLE,
        scale_collapsed = SCALE_COLLAPSED,
        scale_expanded = SCALE_EXPANDED,
        content = CONTENT,
        hidden = HIDDEN,
        slide = SLIDE,
        active = ACTIVE,
        dot = DOT,
        dot_active = DOT_ACTIVE,
        dot_inactive = DOT_INACTIVE,
        counter = COUNTER,
        close = CLOSE,
        prev = PREV,
        next = NEXT,
        trigger = TRIGGER_ATTR,
        global = RUNTIME_GLOBAL,
    )
}
